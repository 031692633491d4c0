use super::*;
use crate::{schema::source::FieldId, Error, Result};

/// Supplies the context an expression needs beyond the row it is evaluated
/// against: runtime arguments and relation navigation.
pub trait Input {
    /// Returns the value supplied for `expr_arg`. Returning `None` makes the
    /// evaluator fall back to the argument's default.
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        let _ = expr_arg;
        None
    }

    /// Reads `field` from `row`.
    ///
    /// The default implementation reads the stored value at the field's
    /// index. Inputs backed by a data source override this to follow
    /// relations.
    fn read_field(&mut self, row: &ValueRecord, field: FieldId) -> Result<Value> {
        row.get(field.index).cloned().ok_or_else(|| {
            Error::expression_evaluation_failed(format!(
                "field index {} out of bounds for record of {} fields",
                field.index,
                row.len()
            ))
        })
    }
}

#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

impl Input for &Params {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.get(&expr_arg.key).cloned()
    }
}

impl<T: Input + ?Sized> Input for &mut T {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        (**self).resolve_arg(expr_arg)
    }

    fn read_field(&mut self, row: &ValueRecord, field: FieldId) -> Result<Value> {
        (**self).read_field(row, field)
    }
}
