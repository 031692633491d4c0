use super::*;

/// A nested query, evaluated once per parent row.
///
/// Only valid as a field of a query's projection record. The nested query's
/// [`Source::Field`] is resolved relative to the parent row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub query: Box<Query>,
}

impl ExprStmt {
    pub fn new(query: impl Into<Query>) -> Self {
        Self {
            query: Box::new(query.into()),
        }
    }
}

impl Expr {
    pub fn stmt(query: impl Into<Query>) -> Self {
        Self::Stmt(ExprStmt::new(query))
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}

impl From<Query> for ExprStmt {
    fn from(value: Query) -> Self {
        Self::new(value)
    }
}
