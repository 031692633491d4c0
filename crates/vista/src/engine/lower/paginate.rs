use super::LowerQuery;
use crate::{Error, Result};
use vista_core::{options::QueryOptions, stmt};

impl LowerQuery<'_> {
    /// Attaches `top`/`skip` to the level they were given at. Nested levels
    /// get their own window from their own options.
    pub(super) fn lower_limit(&self, options: &QueryOptions) -> Result<Option<stmt::Limit>> {
        let limit = options.top.map(|top| to_count("top", top)).transpose()?;
        let offset = options.skip.map(|skip| to_count("skip", skip)).transpose()?;

        Ok(stmt::Limit::new(limit, offset))
    }
}

fn to_count(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::invalid_query_options(format!("{name} must be non-negative, got {value}"))
    })
}
