use super::Simplify;
use std::mem;
use vista_core::stmt::{self, Expr};

impl Simplify {
    pub(super) fn simplify_expr_or(&mut self, expr: &mut stmt::ExprOr) -> Option<Expr> {
        // Flatten any nested ors
        for i in 0..expr.operands.len() {
            if let Expr::Or(or) = &mut expr.operands[i] {
                let mut nested = mem::take(&mut or.operands);
                expr.operands[i] = false.into();
                expr.operands.append(&mut nested);
            }
        }

        // `or(..., true, ...) → true`
        if expr.operands.iter().any(|e| e.is_true()) {
            return Some(true.into());
        }

        // `or(..., false, ...) → or(..., ...)`
        expr.operands.retain(|expr| !expr.is_false());

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
            0 => Some(false.into()),
            1 => expr.operands.pop(),
            _ => None,
        }
    }
}
