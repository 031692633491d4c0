use super::*;

/// Maps one view shape to one source shape.
#[derive(Debug, Clone)]
pub struct Model {
    /// Source model rows are read from
    pub source: source::ModelId,

    /// View model being produced
    pub view: view::ModelId,

    /// One entry per view field, in view field order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}
