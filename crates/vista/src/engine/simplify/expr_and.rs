use super::Simplify;
use std::mem;
use vista_core::stmt::{self, Expr};

impl Simplify {
    pub(super) fn simplify_expr_and(&mut self, expr: &mut stmt::ExprAnd) -> Option<Expr> {
        // Flatten any nested ands
        for i in 0..expr.operands.len() {
            if let Expr::And(and) = &mut expr.operands[i] {
                let mut nested = mem::take(&mut and.operands);
                expr.operands[i] = true.into();
                expr.operands.append(&mut nested);
            }
        }

        // `and(..., false, ...) → false`
        if expr.operands.iter().any(|e| e.is_false()) {
            return Some(false.into());
        }

        // `and(..., true, ...) → and(..., ...)`
        expr.operands.retain(|expr| !expr.is_true());

        // Idempotent law, `a and a` → `a`
        let mut seen = Vec::new();
        expr.operands.retain(|operand| {
            if seen.contains(operand) {
                false
            } else {
                seen.push(operand.clone());
                true
            }
        });

        match expr.operands.len() {
            0 => Some(true.into()),
            1 => expr.operands.pop(),
            _ => None,
        }
    }
}
