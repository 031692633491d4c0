use super::Simplify;
use vista_core::stmt::{self, Expr};

impl Simplify {
    pub(super) fn simplify_expr_is_null(&mut self, expr: &mut stmt::ExprIsNull) -> Option<Expr> {
        match &*expr.expr {
            Expr::Value(value) => Some(value.is_null().into()),
            _ => None,
        }
    }
}
