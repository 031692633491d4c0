use super::*;
use crate::stmt::Type;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the source schema
    pub id: FieldId,

    /// Name of the field
    pub name: String,

    /// What the field holds
    pub ty: FieldTy,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    /// A stored value
    Primitive(Type),

    /// Navigates to the single target row whose primary key equals this
    /// row's foreign key
    BelongsTo(BelongsTo),

    /// Navigates to every target row whose paired foreign key references
    /// this row
    HasMany(HasMany),
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    pub fn relation_target(&self) -> Option<ModelId> {
        match &self.ty {
            FieldTy::Primitive(_) => None,
            FieldTy::BelongsTo(belongs_to) => Some(belongs_to.target),
            FieldTy::HasMany(has_many) => Some(has_many.target),
        }
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::BelongsTo(..) | Self::HasMany(..))
    }

    pub fn as_primitive(&self) -> Option<&Type> {
        match self {
            Self::Primitive(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Self::BelongsTo(belongs_to) => Some(belongs_to),
            _ => None,
        }
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        match self {
            Self::HasMany(has_many) => Some(has_many),
            _ => None,
        }
    }
}

impl From<&Field> for FieldId {
    fn from(value: &Field) -> Self {
        value.id
    }
}

impl From<&FieldId> for FieldId {
    fn from(value: &FieldId) -> Self {
        *value
    }
}

impl std::fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
