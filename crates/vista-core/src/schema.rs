mod builder;
pub use builder::{Builder, MappingBuilder, SourceModelBuilder, ViewModelBuilder};

pub mod config;

pub mod mapping;
pub use mapping::Mapping;

mod name;

pub mod source;

pub mod view;

mod verify;

use crate::{options::Path, Error, Result};
use std::sync::Arc;

/// The registered source graph, view shapes and the mappings between them.
///
/// Built once through [`Builder`] and immutable afterwards. Shared between
/// requests behind an `Arc`.
#[derive(Debug)]
pub struct Schema {
    /// Shape of the persisted entity graph
    pub source: Arc<source::Schema>,

    /// Shapes exposed to callers
    pub view: view::Schema,

    /// How each view shape is read from a source shape
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the mapping that reads `view` from `source`.
    pub fn mapping_for(
        &self,
        source: source::ModelId,
        view: view::ModelId,
    ) -> Result<&mapping::Model> {
        self.mapping.get(source, view).ok_or_else(|| {
            Error::invalid_schema(format!(
                "no mapping registered from `{}` to `{}`",
                self.source.model(source).name,
                self.view.model(view).name
            ))
        })
    }

    /// Looks up the mapping between two models by name.
    pub fn mapping_by_name(&self, source: &str, view: &str) -> Result<&mapping::Model> {
        let Some(source_model) = self.source.model_by_name(source) else {
            return Err(Error::invalid_schema(format!(
                "unknown source model `{source}`"
            )));
        };

        let Some(view_model) = self.view.model_by_name(view) else {
            return Err(Error::invalid_schema(format!("unknown view model `{view}`")));
        };

        self.mapping_for(source_model.id, view_model.id)
    }

    /// Resolves a view property path to the source expression that produces
    /// it.
    pub fn resolve_path(
        &self,
        source: source::ModelId,
        view: view::ModelId,
        path: &Path,
    ) -> Result<mapping::Resolved> {
        self.mapping_for(source, view)?.resolve_path(self, path)
    }
}
