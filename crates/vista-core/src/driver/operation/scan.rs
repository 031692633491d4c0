use super::*;

use crate::schema::source::ModelId;

#[derive(Debug)]
pub struct Scan {
    /// Which model to read
    pub model: ModelId,
}

impl From<Scan> for Operation {
    fn from(value: Scan) -> Self {
        Self::Scan(value)
    }
}
