use super::Snapshot;
use crate::{Error, Result};
use vista_core::{
    schema::source::{self, FieldId, FieldTy},
    stmt::{ExprArg, Input, Params, Value, ValueRecord},
};

/// Evaluation context for execution: request parameters plus relation
/// navigation over the loaded snapshot.
pub(super) struct ExecInput<'a> {
    source: &'a source::Schema,
    snapshot: &'a Snapshot,
    params: &'a Params,
}

impl<'a> ExecInput<'a> {
    pub(super) fn new(
        source: &'a source::Schema,
        snapshot: &'a Snapshot,
        params: &'a Params,
    ) -> ExecInput<'a> {
        ExecInput {
            source,
            snapshot,
            params,
        }
    }
}

impl Input for ExecInput<'_> {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.params.get(&expr_arg.key).cloned()
    }

    fn read_field(&mut self, row: &ValueRecord, field_id: FieldId) -> Result<Value> {
        match &self.source.field(field_id).ty {
            FieldTy::Primitive(_) => slot(row, field_id.index).cloned(),
            FieldTy::BelongsTo(belongs_to) => {
                let key = slot(row, belongs_to.foreign_key.index)?;

                if key.is_null() {
                    return Ok(Value::Null);
                }

                let target = self.snapshot.table(belongs_to.target)?;
                Ok(target
                    .get(key)
                    .map(|record| Value::Record(record.clone()))
                    .unwrap_or_default())
            }
            FieldTy::HasMany(has_many) => {
                let owner = self.source.model(field_id.model);
                let key = slot(row, owner.primary_key.index)?;

                let target = self.snapshot.table(has_many.target)?;
                Ok(Value::List(
                    target
                        .referencing(has_many.pair, key)
                        .map(|record| Value::Record(record.clone()))
                        .collect(),
                ))
            }
        }
    }
}

fn slot(row: &ValueRecord, index: usize) -> Result<&Value> {
    row.get(index).ok_or_else(|| {
        Error::expression_evaluation_failed(format!(
            "field index {index} out of bounds for record of {} fields",
            row.len()
        ))
    })
}
