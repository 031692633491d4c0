use std::sync::{Arc, Mutex};
use vista_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::source::{ModelId, Schema},
    Result,
};

/// A driver wrapper recording which operations reach the underlying
/// driver.
#[derive(Debug)]
pub struct LoggingDriver<D> {
    inner: D,

    /// Shared with [`ExecLog`](crate::ExecLog) handles
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

/// One operation as seen by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOp {
    pub name: &'static str,
    pub model: ModelId,
}

impl<D> LoggingDriver<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl<D: Driver> Driver for LoggingDriver<D> {
    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        self.inner.register_schema(schema).await
    }

    async fn exec(&self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        let model = match &operation {
            Operation::Insert(insert) => insert.model,
            Operation::Scan(scan) => scan.model,
        };

        let driver_op = DriverOp {
            name: operation.name(),
            model,
        };

        let response = self.inner.exec(schema, operation).await?;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        Ok(response)
    }
}
