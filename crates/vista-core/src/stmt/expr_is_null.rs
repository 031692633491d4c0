use super::*;

/// Tests whether an expression evaluates to null.
///
/// A field reached through a relation that is itself null also evaluates to
/// null, so `is_null(Builder.City.Name)` holds when the building has no
/// builder at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        ExprIsNull {
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Self::not(Self::is_null(expr))
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
