mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::source::Schema};

use std::{fmt::Debug, sync::Arc};

/// A queryable data source holding rows of source models.
///
/// Drivers store one record per source row, with one value per model field
/// in field order. Relation fields occupy a slot but hold null; navigation is
/// computed from foreign keys during execution.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Register the schema with the driver.
    async fn register_schema(&mut self, schema: &Schema) -> crate::Result<()>;

    /// Execute an operation
    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> crate::Result<Response>;
}
