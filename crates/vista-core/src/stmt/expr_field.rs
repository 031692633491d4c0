use super::*;
use crate::schema::source::FieldId;

/// References a source field by walking a chain of fields from the row being
/// evaluated.
///
/// Every step but the last must be a relation. A single-step path reads a
/// field of the current row directly. An empty path refers to the row
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExprField {
    pub path: Vec<FieldId>,
}

impl ExprField {
    pub fn new(path: Vec<FieldId>) -> Self {
        Self { path }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// The field read by the final step.
    pub fn last(&self) -> Option<FieldId> {
        self.path.last().copied()
    }

    /// Returns a new path that first walks `self`, then `rest`.
    pub fn join(&self, rest: &ExprField) -> ExprField {
        let mut path = Vec::with_capacity(self.path.len() + rest.path.len());
        path.extend_from_slice(&self.path);
        path.extend_from_slice(&rest.path);
        ExprField { path }
    }
}

impl Expr {
    pub fn field(field: impl Into<ExprField>) -> Self {
        Self::Field(field.into())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(..))
    }
}

impl From<FieldId> for ExprField {
    fn from(value: FieldId) -> Self {
        Self { path: vec![value] }
    }
}

impl From<Vec<FieldId>> for ExprField {
    fn from(path: Vec<FieldId>) -> Self {
        Self { path }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}

impl From<FieldId> for Expr {
    fn from(value: FieldId) -> Self {
        Self::Field(value.into())
    }
}
