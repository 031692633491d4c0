mod field;
pub use field::{Field, FieldId, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{BelongsTo, HasMany};

use super::name;

/// The persisted entity graph queries are executed against.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: Vec<Model>,
}

impl Schema {
    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        &self.models[id.into().0]
    }

    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }

    /// Looks a model up by name, exact match first.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        name::position(self.models.iter().map(|model| &model.name[..]), name)
            .map(|index| &self.models[index])
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.iter()
    }
}
