use super::ModelId;
use crate::stmt::Type;

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    /// A scalar member
    Primitive(Type),

    /// A nested single object of another view shape
    Object(ModelId),

    /// A nested collection of another view shape
    Collection(ModelId),
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_relation(&self) -> bool {
        !self.is_primitive()
    }

    pub fn target(&self) -> Option<ModelId> {
        match self {
            Self::Primitive(_) => None,
            Self::Object(target) | Self::Collection(target) => Some(*target),
        }
    }
}
