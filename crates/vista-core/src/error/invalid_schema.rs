use super::Error;

/// Error when a schema or mapping registration is invalid.
///
/// This occurs when:
/// - a model or field name is duplicated
/// - a relation targets an unknown model or has a malformed foreign key
/// - a view member cannot be mapped to any source member
/// - a mapped member's type or shape disagrees with its source
///
/// Caught by `schema::Builder::build`, before any query is translated.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
