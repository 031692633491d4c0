use super::LowerQuery;
use crate::{Error, Result};
use vista_core::{
    options::OrderByItem,
    schema::mapping::Resolved,
    stmt::{self, OrderByExpr},
};

impl LowerQuery<'_> {
    /// Rewrites each sort clause into a source expression. Clause order is
    /// kept: the first clause is the primary key.
    pub(super) fn lower_order_by(&self, items: &[OrderByItem]) -> Result<Option<stmt::OrderBy>> {
        if items.is_empty() {
            return Ok(None);
        }

        let mut exprs = Vec::with_capacity(items.len());

        for item in items {
            let expr = match self.mapping.resolve_path(self.schema, &item.path)? {
                Resolved::Primitive { field, .. } => stmt::Expr::Field(field),
                Resolved::Computed { expr, .. } => expr,
                Resolved::Relation { .. } => {
                    return Err(Error::unsupported_operator(format!(
                        "cannot order by relation `{}`",
                        item.path
                    )));
                }
            };

            exprs.push(OrderByExpr {
                expr,
                order: item.direction,
            });
        }

        Ok(Some(stmt::OrderBy { exprs }))
    }
}
