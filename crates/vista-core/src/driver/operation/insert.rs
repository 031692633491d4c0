use super::*;

use crate::{schema::source::ModelId, stmt::ValueRecord};

#[derive(Debug)]
pub struct Insert {
    /// Which model the rows belong to
    pub model: ModelId,

    /// Rows to store, one value per model field
    pub rows: Vec<ValueRecord>,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
