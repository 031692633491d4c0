mod collect;
mod input;
mod snapshot;

use input::ExecInput;
use snapshot::Snapshot;

use crate::{
    engine::{ComposedQuery, Engine},
    Error, Result,
};
use std::cmp::Ordering;
use vista_core::{
    driver::Driver,
    stmt::{self, Expr, OrderByExpr, Value},
};

/// Runs one composed query against a loaded snapshot.
struct Exec<'a> {
    input: ExecInput<'a>,
}

impl Engine {
    /// Fetches every source model the query touches, then filters, orders,
    /// pages and projects in memory.
    ///
    /// The driver fetch is the only await point; once the snapshot is
    /// loaded execution is synchronous.
    pub(super) async fn exec_query(
        &self,
        driver: &dyn Driver,
        query: &ComposedQuery,
    ) -> Result<Vec<Value>> {
        let source = &self.schema.source;

        let Some(model) = query.query.source.as_model_id() else {
            return Err(crate::err!("a composed query must read from a source model"));
        };

        let models = collect::models(source, &query.query);
        tracing::debug!(?models, "loading source models");

        let snapshot = Snapshot::load(source, driver, models).await?;

        let rows = snapshot
            .table(model)?
            .rows()
            .iter()
            .cloned()
            .map(Value::Record)
            .collect();

        let mut exec = Exec {
            input: ExecInput::new(source, &snapshot, &query.params),
        };

        let records = exec.exec_query(&query.query, rows)?;
        tracing::debug!(records = records.len(), "executed view query");

        Ok(records)
    }
}

impl Exec<'_> {
    /// Filter, then order, then skip/take, then project. Paging sees source
    /// rows, never projected ones.
    fn exec_query(&mut self, query: &stmt::Query, rows: Vec<Value>) -> Result<Vec<Value>> {
        let mut rows = self.filter(&query.filter, rows)?;

        if let Some(order_by) = &query.order_by {
            rows = self.sort(order_by, rows)?;
        }

        if let Some(limit) = &query.limit {
            rows = limit.apply(rows);
        }

        let mut records = Vec::with_capacity(rows.len());

        for row in &rows {
            records.push(self.project(&query.returning, row)?);
        }

        Ok(records)
    }

    fn filter(&mut self, filter: &stmt::Filter, rows: Vec<Value>) -> Result<Vec<Value>> {
        let Some(expr) = filter.as_expr() else {
            return Ok(rows);
        };

        let mut ret = Vec::with_capacity(rows.len());

        for row in rows {
            if expr.eval_bool(&row, &mut self.input)? {
                ret.push(row);
            }
        }

        Ok(ret)
    }

    fn sort(&mut self, order_by: &stmt::OrderBy, rows: Vec<Value>) -> Result<Vec<Value>> {
        let mut keyed = Vec::with_capacity(rows.len());

        for row in rows {
            let mut key = Vec::with_capacity(order_by.exprs.len());

            for order_by_expr in &order_by.exprs {
                key.push(order_by_expr.expr.eval(&row, &mut self.input)?);
            }

            keyed.push((key, row));
        }

        // Stable: rows with equal keys keep their source order
        keyed.sort_by(|(lhs, _), (rhs, _)| compare_keys(&order_by.exprs, lhs, rhs));

        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }

    fn project(&mut self, returning: &stmt::ExprRecord, row: &Value) -> Result<Value> {
        let mut fields = Vec::with_capacity(returning.len());

        for expr in returning {
            fields.push(match expr {
                Expr::Stmt(expr_stmt) => self.exec_nested(&expr_stmt.query, row)?,
                expr => expr.eval(row, &mut self.input)?,
            });
        }

        Ok(Value::record_from_vec(fields))
    }

    /// Runs an expansion query against the rows reached from `parent`.
    fn exec_nested(&mut self, query: &stmt::Query, parent: &Value) -> Result<Value> {
        let stmt::Source::Field(path) = &query.source else {
            return Err(crate::err!("an expansion must read through a relation"));
        };

        let rows = match Expr::Field(path.clone()).eval(parent, &mut self.input)? {
            Value::Null => vec![],
            Value::List(items) => items,
            record @ Value::Record(_) => vec![record],
            value => {
                return Err(Error::invalid_result(format!(
                    "relation yielded {:?} instead of records",
                    value.infer_ty()
                )))
            }
        };

        let records = self.exec_query(query, rows)?;

        Ok(if query.single {
            records.into_iter().next().unwrap_or_default()
        } else {
            Value::List(records)
        })
    }
}

/// Compares two sort keys clause by clause. Nulls sort first ascending.
fn compare_keys(exprs: &[OrderByExpr], lhs: &[Value], rhs: &[Value]) -> Ordering {
    for ((order_by_expr, lhs), rhs) in exprs.iter().zip(lhs).zip(rhs) {
        let ordering = lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal);

        let ordering = if order_by_expr.order.is_desc() {
            ordering.reverse()
        } else {
            ordering
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
