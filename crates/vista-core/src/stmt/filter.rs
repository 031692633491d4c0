use super::*;

/// The filter applied to a query's source rows. An empty filter selects every
/// row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub expr: Option<Expr>,
}

impl Filter {
    pub const ALL: Filter = Filter { expr: None };

    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: Some(expr.into()),
        }
    }

    pub fn is_all(&self) -> bool {
        match &self.expr {
            None => true,
            Some(expr) => expr.is_true(),
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        self.expr.as_ref()
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        match (self.expr.take(), filter.into().expr) {
            (Some(expr), Some(other)) => {
                self.expr = Some(Expr::and(expr, other));
            }
            (Some(expr), None) => {
                self.expr = Some(expr);
            }
            (_, other) => {
                self.expr = other;
            }
        }
    }
}

impl<T> From<T> for Filter
where
    Expr: From<T>,
{
    fn from(value: T) -> Self {
        Filter {
            expr: Some(value.into()),
        }
    }
}
