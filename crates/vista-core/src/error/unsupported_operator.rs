use super::Error;

/// Error when a query uses an operator or option the mapped member cannot
/// support, such as ordering by a relation or paging a single-object
/// expansion.
#[derive(Debug)]
pub(super) struct UnsupportedOperator {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperator {}

impl core::fmt::Display for UnsupportedOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operator: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported operator error.
    pub fn unsupported_operator(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(UnsupportedOperator {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported operator error.
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperator(_))
    }
}
