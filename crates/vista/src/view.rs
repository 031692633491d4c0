//! Typed materialization of view records.
//!
//! Execution yields one [`ValueRecord`] per result, holding the view's
//! members in declaration order. Types implementing [`View`] turn those
//! records into DTOs.

use crate::{stmt::Value, Error, Result};
use vista_core::stmt::ValueRecord;

/// A DTO materialized from the records of one view model.
pub trait View: Sized {
    /// Name of the view model in the schema
    const NAME: &'static str;

    /// Builds the DTO from a record holding one value per view member.
    fn load(record: ValueRecord) -> Result<Self>;
}

/// Loads a single-object member. Unexpanded or missing objects are `None`.
pub fn load_one<V: View>(value: Value) -> Result<Option<V>> {
    match value {
        Value::Null => Ok(None),
        Value::Record(record) => V::load(record).map(Some),
        value => Err(Error::type_conversion(value, V::NAME)),
    }
}

/// Loads a collection member. Unexpanded collections are empty.
pub fn load_many<V: View>(value: Value) -> Result<Vec<V>> {
    value
        .to_list()?
        .into_iter()
        .map(|item| V::load(item.to_record()?))
        .collect()
}

/// Takes the values out of `record`, checking it has one per member.
pub fn fields<const N: usize>(record: ValueRecord) -> Result<[Value; N]> {
    let len = record.len();

    <[Value; N]>::try_from(record.into_vec()).map_err(|_| {
        Error::invalid_result(format!("expected a record of {N} fields, got {len}"))
    })
}
