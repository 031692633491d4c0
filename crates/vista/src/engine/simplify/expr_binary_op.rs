use super::Simplify;
use vista_core::stmt::{self, Expr};

impl Simplify {
    /// Folds comparisons between two constants. Comparisons the evaluator
    /// rejects are left for execution to report.
    pub(super) fn simplify_expr_binary_op(
        &mut self,
        expr: &mut stmt::ExprBinaryOp,
    ) -> Option<Expr> {
        if !expr.lhs.is_value() || !expr.rhs.is_value() {
            return None;
        }

        let folded = Expr::BinaryOp(expr.clone()).eval_const().ok()?;
        Some(Expr::Value(folded))
    }
}
