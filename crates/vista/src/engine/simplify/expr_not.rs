use super::Simplify;
use vista_core::stmt::{self, Expr, Value};

impl Simplify {
    pub(super) fn simplify_expr_not(&mut self, expr: &mut stmt::ExprNot) -> Option<Expr> {
        match &mut *expr.expr {
            // `not(not(x)) → x`
            Expr::Not(inner) => Some(inner.expr.take()),
            Expr::Value(Value::Bool(value)) => Some((!*value).into()),
            // Null counts as false in filters
            Expr::Value(Value::Null) => Some(true.into()),
            _ => None,
        }
    }
}
