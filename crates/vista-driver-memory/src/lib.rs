use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use vista_core::{
    async_trait,
    driver::{
        operation::{Insert, Operation, Scan},
        Driver, Response,
    },
    schema::source::{ModelId, Schema},
    stmt::{Value, ValueRecord, ValueStream},
    Error, Result,
};

/// An in-memory source holding the rows of every registered model.
///
/// Scans return rows in insertion order. Tables are guarded by a lock that
/// is only written while rows are inserted.
#[derive(Debug, Default)]
pub struct Memory {
    tables: RwLock<IndexMap<ModelId, Vec<ValueRecord>>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    fn scan(&self, schema: &Schema, op: Scan) -> Result<Response> {
        let tables = self.tables.read().map_err(|_| poisoned())?;

        let Some(rows) = tables.get(&op.model) else {
            return Err(unregistered(schema, op.model));
        };

        tracing::trace!(model = %schema.model(op.model).name, rows = rows.len(), "scan");

        let values = rows.iter().cloned().map(Value::Record).collect();
        Ok(Response::value_stream(ValueStream::from_vec(values)))
    }

    fn insert(&self, schema: &Schema, op: Insert) -> Result<Response> {
        let model = schema.model(op.model);

        for row in &op.rows {
            if row.len() != model.fields.len() {
                return Err(Error::invalid_result(format!(
                    "row for `{}` has {} values, expected {}",
                    model.name,
                    row.len(),
                    model.fields.len()
                )));
            }
        }

        let mut tables = self.tables.write().map_err(|_| poisoned())?;

        let Some(rows) = tables.get_mut(&op.model) else {
            return Err(unregistered(schema, op.model));
        };

        let count = op.rows.len() as u64;
        rows.extend(op.rows);

        tracing::trace!(model = %model.name, count, "insert");

        Ok(Response::count(count))
    }
}

#[async_trait]
impl Driver for Memory {
    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        let tables = self.tables.get_mut().map_err(|_| poisoned())?;

        for model in schema.models() {
            tables.entry(model.id).or_default();
        }

        tracing::debug!(models = tables.len(), "registered schema with memory driver");
        Ok(())
    }

    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.insert(schema, op),
            Operation::Scan(op) => self.scan(schema, op),
        }
    }
}

fn unregistered(schema: &Schema, model: ModelId) -> Error {
    Error::driver(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("model `{}` is not registered", schema.model(model).name),
    ))
}

fn poisoned() -> Error {
    Error::driver(std::io::Error::other("memory driver lock poisoned"))
}
