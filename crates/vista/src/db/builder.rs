use super::Db;
use crate::{engine::Engine, Error, Result, Schema};
use std::sync::Arc;
use vista_core::driver::Driver;

#[derive(Debug, Default)]
pub struct Builder {
    schema: Option<Arc<Schema>>,
}

impl Builder {
    pub fn schema(&mut self, schema: impl Into<Arc<Schema>>) -> &mut Self {
        self.schema = Some(schema.into());
        self
    }

    /// Registers the source schema with `driver` and returns a handle.
    pub async fn build(&mut self, mut driver: impl Driver) -> Result<Db> {
        let Some(schema) = self.schema.clone() else {
            return Err(Error::invalid_schema("no schema configured"));
        };

        driver.register_schema(&schema.source).await?;

        tracing::debug!(
            sources = schema.source.models.len(),
            views = schema.view.models.len(),
            mappings = schema.mapping.models.len(),
            "database handle built"
        );

        Ok(Db {
            engine: Engine::new(schema),
            driver: Arc::new(driver),
        })
    }
}
