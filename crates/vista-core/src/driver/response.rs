use crate::{stmt::ValueStream, Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Values(ValueStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn value_stream(values: impl Into<ValueStream>) -> Self {
        Self {
            rows: Rows::Values(values.into()),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(Error::invalid_result("expected count, got values")),
        }
    }

    pub fn into_values(self) -> Result<ValueStream> {
        match self {
            Rows::Values(values) => Ok(values),
            Rows::Count(_) => Err(Error::invalid_result("expected values, got count")),
        }
    }
}
