mod field;
pub use field::{Field, FieldIgnore, FieldParam, FieldPrimitive, FieldRelation};

mod model;
pub use model::Model;

mod resolve;
pub use resolve::Resolved;

use super::{source, view};
use indexmap::IndexMap;

/// Defines how each view shape is read from a source shape.
///
/// Mappings are keyed by the (source, view) pair. Nested relations refer to
/// the mapping of their target pair by key, so a mapping used at several
/// places in a view graph is stored once.
#[derive(Debug, Default)]
pub struct Mapping {
    pub models: IndexMap<(source::ModelId, view::ModelId), Model>,
}

impl Mapping {
    pub fn get(&self, source: source::ModelId, view: view::ModelId) -> Option<&Model> {
        self.models.get(&(source, view))
    }

    pub fn contains(&self, source: source::ModelId, view: view::ModelId) -> bool {
        self.models.contains_key(&(source, view))
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }
}
