use crate::logging_driver::DriverOp;
use std::sync::{Arc, Mutex};
use vista_core::schema::source::ModelId;

/// A view of the operations log for assertions.
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Models scanned since the log was last cleared, in scan order.
    pub fn scanned(&self) -> Vec<ModelId> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.name == "scan")
            .map(|op| op.model)
            .collect()
    }

    /// Number of inserts since the log was last cleared.
    pub fn inserts(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.name == "insert")
            .count()
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
