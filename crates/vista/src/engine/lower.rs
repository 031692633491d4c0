mod filter;
mod order_by;
mod paginate;
mod returning;

use crate::{engine::Engine, Result};
use vista_core::{
    options::QueryOptions,
    schema::{mapping, view},
    stmt, Schema,
};

/// Lowers one level of query options, expressed in the vocabulary of
/// `mapping.view`, into a query over `mapping.source` rows.
///
/// Expanded relations recurse with a new `LowerQuery` for the nested
/// mapping; each level only ever sees its own options.
#[derive(Debug)]
struct LowerQuery<'a> {
    schema: &'a Schema,
    mapping: &'a mapping::Model,
}

impl Engine {
    pub(super) fn lower_query(
        &self,
        mapping: &mapping::Model,
        options: &QueryOptions,
    ) -> Result<stmt::Query> {
        LowerQuery::new(&self.schema, mapping).lower(options, mapping.source.into(), false)
    }
}

impl<'a> LowerQuery<'a> {
    fn new(schema: &'a Schema, mapping: &'a mapping::Model) -> Self {
        LowerQuery { schema, mapping }
    }

    fn view_model(&self) -> &'a view::Model {
        self.schema.view.model(self.mapping.view)
    }

    fn lower(
        &self,
        options: &QueryOptions,
        source: stmt::Source,
        single: bool,
    ) -> Result<stmt::Query> {
        let returning = self.lower_returning(&options.expand)?;

        let mut query = stmt::Query::new(source, returning);
        query.single = single;

        if let Some(predicate) = &options.filter {
            query.filter = stmt::Filter::new(self.lower_filter(predicate)?);
        }

        query.order_by = self.lower_order_by(&options.order_by)?;
        query.limit = self.lower_limit(options)?;

        tracing::trace!(
            view = %self.view_model().name,
            expanded = options.expand.len(),
            "lowered query level"
        );

        Ok(query)
    }
}
