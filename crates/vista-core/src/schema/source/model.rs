use super::*;
use crate::schema::name;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the source schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Fields contained by the model, in row order. Relation fields occupy a
    /// slot in stored rows but hold null; their values are computed by
    /// navigation.
    pub fields: Vec<Field>,

    /// The field holding the model's key
    pub primary_key: FieldId,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        name::position(self.fields.iter().map(|field| &field.name[..]), name)
            .map(|index| &self.fields[index])
    }

    pub fn primary_key_field(&self) -> &Field {
        self.field(self.primary_key)
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<&ModelId> for ModelId {
    fn from(src: &ModelId) -> Self {
        *src
    }
}

impl std::fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
