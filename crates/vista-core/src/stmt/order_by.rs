use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(exprs: Vec<OrderByExpr>) -> Self {
        Self { exprs }
    }
}
