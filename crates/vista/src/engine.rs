mod exec;
mod lower;
mod params;
mod simplify;

use crate::Result;
use std::sync::Arc;
use vista_core::{
    driver::Driver,
    schema::{source, view},
    stmt::{self, Params, ValueStream},
    QueryOptions, Schema,
};

/// Translates view-shaped query options into composed source queries and
/// runs them.
///
/// The engine holds nothing but the shared, immutable schema, so it is cheap
/// to clone and safe to use from any number of requests at once.
#[derive(Debug, Clone)]
pub struct Engine {
    pub schema: Arc<Schema>,
}

/// A query expressed purely in source vocabulary, ready for execution.
///
/// Built once per request by [`Engine::translate`]. The view is referenced
/// only by the final projection step.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    /// Source model the root rows are read from
    pub source: source::ModelId,

    /// View model the projection produces
    pub view: view::ModelId,

    pub query: stmt::Query,

    /// Runtime parameters read by computed members
    pub params: Params,
}

impl Engine {
    pub fn new(schema: Arc<Schema>) -> Engine {
        Engine { schema }
    }

    /// Translates `options`, expressed against the `view` shape, into a query
    /// against the `source` model.
    ///
    /// Options are validated first; no translation happens for malformed
    /// options. Parameters read by computed members must convert to the
    /// member's type.
    pub fn translate(
        &self,
        source: &str,
        view: &str,
        options: &QueryOptions,
        params: Params,
    ) -> Result<ComposedQuery> {
        let _span = tracing::debug_span!("translate", source, view).entered();

        options.validate()?;
        let params = self.coerce_params(params)?;

        let mapping = self.schema.mapping_by_name(source, view)?;
        let mut query = self.lower_query(mapping, options)?;
        self.simplify_query(&mut query);

        tracing::debug!(?query, "translated view query");

        Ok(ComposedQuery {
            source: mapping.source,
            view: mapping.view,
            query,
            params,
        })
    }

    /// Runs a composed query against `driver`, yielding one record per
    /// matching root row in result order.
    pub async fn exec(&self, driver: &dyn Driver, query: &ComposedQuery) -> Result<ValueStream> {
        let records = self.exec_query(driver, query).await?;
        Ok(ValueStream::from_vec(records))
    }
}
