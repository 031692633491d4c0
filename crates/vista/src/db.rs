mod builder;
pub use builder::Builder;

use crate::{
    engine::{ComposedQuery, Engine},
    view::View,
    Error, QueryOptions, Result, Schema,
};
use std::sync::Arc;
use tokio_stream::Stream;
use vista_core::{
    driver::{operation::Insert, Driver},
    stmt::{Params, Value, ValueRecord, ValueStream},
};

/// A handle for querying views over one data source.
///
/// Cloning is cheap; clones share the schema and the driver.
#[derive(Debug, Clone)]
pub struct Db {
    engine: Engine,
    driver: Arc<dyn Driver>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.engine.schema
    }

    /// Translates `options` against the `view` shape into a query over the
    /// `source` model without running it.
    pub fn translate(
        &self,
        source: &str,
        view: &str,
        options: &QueryOptions,
        params: Params,
    ) -> Result<ComposedQuery> {
        self.engine.translate(source, view, options, params)
    }

    /// Execute a composed query
    pub async fn exec(&self, query: &ComposedQuery) -> Result<ValueStream> {
        self.engine.exec(&*self.driver, query).await
    }

    /// Translates and executes, returning one record per result.
    pub async fn query(
        &self,
        source: &str,
        view: &str,
        options: &QueryOptions,
        params: Params,
    ) -> Result<Vec<Value>> {
        let query = self.translate(source, view, options, params)?;
        self.exec(&query).await?.collect().await
    }

    /// Translates and executes, materializing each result as `V`.
    pub async fn all<V: View>(
        &self,
        source: &str,
        options: &QueryOptions,
        params: Params,
    ) -> Result<Vec<V>> {
        let records = self.query(source, V::NAME, options, params).await?;

        records
            .into_iter()
            .map(|record| V::load(record.to_record()?))
            .collect()
    }

    /// Like [`Db::all`], yielding results one at a time.
    pub fn stream<'a, V: View + 'a>(
        &'a self,
        source: &'a str,
        options: &'a QueryOptions,
        params: Params,
    ) -> impl Stream<Item = Result<V>> + 'a {
        async_stream::try_stream! {
            let query = self.translate(source, V::NAME, options, params)?;
            let mut values = self.exec(&query).await?;

            while let Some(value) = values.next().await {
                yield V::load(value?.to_record()?)?;
            }
        }
    }

    /// Stores rows of the `model` source model, one value per field.
    pub async fn insert(
        &self,
        model: &str,
        rows: impl IntoIterator<Item = ValueRecord>,
    ) -> Result<u64> {
        let source = &self.engine.schema.source;

        let Some(model) = source.model_by_name(model) else {
            return Err(Error::invalid_schema(format!(
                "unknown source model `{model}`"
            )));
        };

        let op = Insert {
            model: model.id,
            rows: rows.into_iter().collect(),
        };

        let count = self.driver.exec(source, op.into()).await?.rows.into_count()?;
        tracing::debug!(model = %model.name, count, "inserted rows");

        Ok(count)
    }
}
