use super::*;

/// A composed query against the source graph.
///
/// Rows come from `source`, are narrowed by `filter`, sorted by `order_by`,
/// windowed by `limit` and finally projected through `returning`, which holds
/// one expression per view field. Nested queries for expanded relations
/// appear in `returning` as [`Expr::Stmt`].
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub source: Source,
    pub filter: Filter,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
    pub returning: ExprRecord,

    /// When `true`, the query yields at most one record (or null) instead of
    /// a list. Used for single-object expansions.
    pub single: bool,
}

impl Query {
    pub fn new(source: impl Into<Source>, returning: ExprRecord) -> Self {
        Self {
            source: source.into(),
            filter: Filter::default(),
            order_by: None,
            limit: None,
            returning,
            single: false,
        }
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter.add_filter(filter);
        self
    }
}

impl Node for Query {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_query(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_query_mut(self);
    }
}
