use crate::{
    stmt::{BinaryOp, ConstInput, Expr, ExprAny, ExprField, ExprPattern, Input, Value},
    Error, Result,
};
use std::cmp::Ordering;

impl Expr {
    /// Evaluates the expression against `row`.
    ///
    /// `row` is the source record the expression is relative to, or
    /// [`Value::Null`] for expressions that do not read fields.
    pub fn eval(&self, row: &Value, mut input: impl Input) -> Result<Value> {
        self.eval_ref(row, &mut input)
    }

    /// Evaluates a predicate against `row`. Null counts as `false`.
    pub fn eval_bool(&self, row: &Value, mut input: impl Input) -> Result<bool> {
        self.eval_bool_ref(row, &mut input)
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(&Value::Null, ConstInput::new())
    }

    fn eval_ref(&self, row: &Value, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                for expr in expr_and {
                    if !expr.eval_bool_ref(row, input)? {
                        return Ok(false.into());
                    }
                }

                Ok(true.into())
            }
            Expr::Any(expr_any) => expr_any.eval_ref(row, input).map(Value::Bool),
            Expr::Arg(expr_arg) => Ok(input
                .resolve_arg(expr_arg)
                .unwrap_or_else(|| expr_arg.default.clone())),
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval_ref(row, input)?;
                let rhs = expr_binary_op.rhs.eval_ref(row, input)?;
                compare(expr_binary_op.op, &lhs, &rhs).map(Value::Bool)
            }
            Expr::Field(expr_field) => expr_field.eval_ref(row, input),
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval_ref(row, input)?;
                Ok(value.is_null().into())
            }
            Expr::Not(expr_not) => {
                let value = expr_not.expr.eval_bool_ref(row, input)?;
                Ok((!value).into())
            }
            Expr::Or(expr_or) => {
                for expr in expr_or {
                    if expr.eval_bool_ref(row, input)? {
                        return Ok(true.into());
                    }
                }

                Ok(false.into())
            }
            Expr::Pattern(expr_pattern) => expr_pattern.eval_ref(row, input).map(Value::Bool),
            Expr::Record(expr_record) => {
                let mut fields = Vec::with_capacity(expr_record.len());

                for expr in expr_record {
                    fields.push(expr.eval_ref(row, input)?);
                }

                Ok(Value::record_from_vec(fields))
            }
            Expr::Stmt(_) => Err(Error::expression_evaluation_failed(
                "nested queries cannot be evaluated as expressions",
            )),
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    fn eval_bool_ref(&self, row: &Value, input: &mut impl Input) -> Result<bool> {
        match self.eval_ref(row, input)? {
            Value::Bool(ret) => Ok(ret),
            Value::Null => Ok(false),
            value => Err(Error::expression_evaluation_failed(format!(
                "expected predicate to evaluate to bool, got {:?}",
                value.infer_ty()
            ))),
        }
    }
}

impl ExprField {
    /// Walks the path from `row`. A null anywhere along the way yields null.
    fn eval_ref(&self, row: &Value, input: &mut impl Input) -> Result<Value> {
        let Some((first, rest)) = self.path.split_first() else {
            return Ok(row.clone());
        };

        let mut current = match row {
            Value::Null => return Ok(Value::Null),
            Value::Record(record) => input.read_field(record, *first)?,
            value => return Err(not_a_record(value)),
        };

        for field in rest {
            current = match &current {
                Value::Null => return Ok(Value::Null),
                Value::Record(record) => input.read_field(record, *field)?,
                value => return Err(not_a_record(value)),
            };
        }

        Ok(current)
    }
}

impl ExprAny {
    fn eval_ref(&self, row: &Value, input: &mut impl Input) -> Result<bool> {
        match self.path.eval_ref(row, input)? {
            Value::Null => Ok(false),
            Value::List(items) => {
                for item in &items {
                    if self.filter.eval_bool_ref(item, input)? {
                        return Ok(true);
                    }
                }

                Ok(false)
            }
            value => Err(Error::expression_evaluation_failed(format!(
                "`any` expects a list, got {:?}",
                value.infer_ty()
            ))),
        }
    }
}

impl ExprPattern {
    fn eval_ref(&self, row: &Value, input: &mut impl Input) -> Result<bool> {
        match self.expr.eval_ref(row, input)? {
            Value::Null => Ok(false),
            Value::String(haystack) => Ok(self.kind.is_match(&haystack, &self.pattern)),
            value => Err(Error::expression_evaluation_failed(format!(
                "pattern match expects a string, got {:?}",
                value.infer_ty()
            ))),
        }
    }
}

/// Two-valued comparison: equality treats null as a regular value and
/// ordering comparisons involving null are `false`.
fn compare(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    match op {
        BinaryOp::Eq => Ok(lhs == rhs),
        BinaryOp::Ne => Ok(lhs != rhs),
        _ if lhs.is_null() || rhs.is_null() => Ok(false),
        _ => {
            let Some(ordering) = lhs.partial_cmp(rhs) else {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot compare {:?} with {:?}",
                    lhs.infer_ty(),
                    rhs.infer_ty()
                )));
            };

            Ok(match op {
                BinaryOp::Ge => ordering != Ordering::Less,
                BinaryOp::Gt => ordering == Ordering::Greater,
                BinaryOp::Le => ordering != Ordering::Greater,
                BinaryOp::Lt => ordering == Ordering::Less,
                BinaryOp::Eq => ordering == Ordering::Equal,
                BinaryOp::Ne => ordering != Ordering::Equal,
            })
        }
    }
}

fn not_a_record(value: &Value) -> Error {
    Error::expression_evaluation_failed(format!(
        "cannot read a field from {:?}",
        value.infer_ty()
    ))
}
