use super::*;
use crate::schema::name;

/// A view shape (DTO).
#[derive(Debug, Clone)]
pub struct Model {
    pub id: ModelId,
    pub name: String,

    /// Members in declaration order. Materialized records hold one value per
    /// member in this order.
    pub fields: Vec<Field>,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(pub usize);

impl Model {
    /// Index of the member called `name`, exact match first.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        name::position(self.fields.iter().map(|field| &field.name[..]), name)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.field_index(name).map(|index| &self.fields[index])
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
        write!(fmt, "ViewModelId({})", self.0)
    }
}
