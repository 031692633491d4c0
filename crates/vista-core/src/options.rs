mod order_by;
pub use order_by::OrderByItem;

mod path;
pub use path::Path;

mod predicate;
pub use predicate::{Func, Operand, Predicate};

mod merge;
mod validate;

use indexmap::IndexMap;

/// A query expressed in view vocabulary.
///
/// `top` and `skip` window the result set of the level they are attached
/// to. Options nested under `expand` govern only the named relation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryOptions {
    pub top: Option<i64>,
    pub skip: Option<i64>,
    pub order_by: Vec<OrderByItem>,
    pub filter: Option<Predicate>,

    /// Relations to materialize, keyed by view member name
    pub expand: IndexMap<String, QueryOptions>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, top: i64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn order_by(mut self, item: impl Into<OrderByItem>) -> Self {
        self.order_by.push(item.into());
        self
    }

    /// Sets the filter, combining it with `and` if one is already present.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Predicate::and(existing, predicate),
            None => predicate,
        });
        self
    }

    /// Expands `name` with the given nested options.
    pub fn expand_with(mut self, name: impl Into<String>, options: QueryOptions) -> Self {
        self.expand.insert(name.into(), options);
        self
    }

    /// Expands `name` with default nested options.
    pub fn expand(self, name: impl Into<String>) -> Self {
        self.expand_with(name, QueryOptions::default())
    }

    /// Whether any option other than `expand` is set.
    pub fn has_query_options(&self) -> bool {
        self.top.is_some()
            || self.skip.is_some()
            || !self.order_by.is_empty()
            || self.filter.is_some()
    }
}
