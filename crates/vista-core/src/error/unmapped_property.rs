use super::Error;

/// Error when a property path does not resolve through the view's mapping.
#[derive(Debug)]
pub(super) struct UnmappedProperty {
    view: Box<str>,
    path: Box<str>,
}

impl std::error::Error for UnmappedProperty {}

impl core::fmt::Display for UnmappedProperty {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unmapped property: `{}` on view `{}`",
            self.path, self.view
        )
    }
}

impl Error {
    /// Creates an unmapped property error for `path` on the view named `view`.
    pub fn unmapped_property(view: impl Into<String>, path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnmappedProperty(UnmappedProperty {
            view: view.into().into(),
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is an unmapped property error.
    pub fn is_unmapped_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedProperty(_))
    }
}
