mod expr_and;
mod expr_binary_op;
mod expr_is_null;
mod expr_not;
mod expr_or;


use crate::engine::Engine;
use vista_core::stmt::{self, visit_mut, Expr, VisitMut};

/// Folds constants and flattens boolean structure in lowered queries.
///
/// Rewrites never change which rows a filter accepts.
pub(crate) struct Simplify;

impl Engine {
    pub(crate) fn simplify_query(&self, query: &mut stmt::Query) {
        Simplify.visit_query_mut(query);
    }
}

impl VisitMut for Simplify {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        // Simplify children first
        visit_mut::visit_expr_mut(self, i);

        let maybe_expr = match i {
            Expr::And(expr_and) => self.simplify_expr_and(expr_and),
            Expr::BinaryOp(expr_binary_op) => self.simplify_expr_binary_op(expr_binary_op),
            Expr::IsNull(expr_is_null) => self.simplify_expr_is_null(expr_is_null),
            Expr::Not(expr_not) => self.simplify_expr_not(expr_not),
            Expr::Or(expr_or) => self.simplify_expr_or(expr_or),
            _ => None,
        };

        if let Some(expr) = maybe_expr {
            *i = expr;
        }
    }

    fn visit_filter_mut(&mut self, i: &mut stmt::Filter) {
        visit_mut::visit_filter_mut(self, i);

        if i.is_all() {
            i.expr = None;
        }
    }
}
