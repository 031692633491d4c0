use super::Error;

/// Error when query options are structurally invalid.
///
/// This occurs when:
/// - `top` or `skip` is negative
/// - a filter, order-by or expand path is empty or has an empty step
/// - nested expand options are themselves invalid
///
/// Raised before any translation work takes place.
#[derive(Debug)]
pub(super) struct InvalidQueryOptions {
    message: Box<str>,
}

impl std::error::Error for InvalidQueryOptions {}

impl core::fmt::Display for InvalidQueryOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query options: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query options error.
    pub fn invalid_query_options(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQueryOptions(InvalidQueryOptions {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid query options error.
    pub fn is_invalid_query_options(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidQueryOptions(_))
    }
}
