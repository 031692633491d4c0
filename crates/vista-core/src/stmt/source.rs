use super::*;
use crate::schema::source::ModelId;

/// Where a query's rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Every row of a source model
    Model(ModelId),

    /// The rows reached by navigating a relation from the parent query's
    /// current row
    Field(ExprField),
}

impl Source {
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    pub fn as_model_id(&self) -> Option<ModelId> {
        match self {
            Self::Model(model) => Some(*model),
            Self::Field(_) => None,
        }
    }
}

impl From<ModelId> for Source {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}

impl From<ExprField> for Source {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
