use super::Error;
use crate::stmt::Type;

/// Error when a filter literal's type does not match the member it is
/// compared with.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    path: Box<str>,
    expected: Type,
    actual: Type,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: `{}` is {:?}, literal is {:?}",
            self.path, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error for the member at `path`.
    pub fn type_mismatch(path: impl Into<String>, expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            path: path.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
