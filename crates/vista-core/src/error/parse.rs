use super::Error;

/// Error when a query string cannot be parsed into query options.
#[derive(Debug)]
pub(super) struct ParseError {
    message: Box<str>,
    offset: usize,
}

impl std::error::Error for ParseError {}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "parse error at offset {}: {}", self.offset, self.message)
    }
}

impl Error {
    /// Creates a parse error at the given byte offset of the parsed input.
    pub fn parse(message: impl Into<String>, offset: usize) -> Error {
        Error::from(super::ErrorKind::Parse(ParseError {
            message: message.into().into(),
            offset,
        }))
    }

    /// Moves a parse error `by` bytes to the right, for input that was cut
    /// out of a larger source. Other errors are returned unchanged.
    pub fn shift_offset(self, by: usize) -> Error {
        match self.kind() {
            super::ErrorKind::Parse(err) => Error::parse(&*err.message, err.offset + by),
            _ => self,
        }
    }

    /// Returns `true` if this error is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Parse(_))
    }
}
