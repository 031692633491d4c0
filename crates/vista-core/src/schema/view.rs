mod field;
pub use field::{Field, FieldTy};

mod model;
pub use model::{Model, ModelId};

use super::name;

/// The shapes exposed to callers.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: Vec<Model>,
}

impl Schema {
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        &self.models[id.into().0]
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        name::position(self.models.iter().map(|model| &model.name[..]), name)
            .map(|index| &self.models[index])
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.iter()
    }
}
