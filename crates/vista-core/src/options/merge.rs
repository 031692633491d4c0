use super::*;
use crate::{Error, Result};

impl QueryOptions {
    /// Adds an expansion of `name`, merging with an existing expansion of
    /// the same name.
    pub fn merge_expand(&mut self, name: impl Into<String>, options: QueryOptions) -> Result<()> {
        let name = name.into();

        match self.expand.get_mut(&name) {
            Some(existing) => existing.merge(&name, options),
            None => {
                self.expand.insert(name, options);
                Ok(())
            }
        }
    }

    /// Merges `other`, given for the expansion `name`, into `self`.
    ///
    /// At most one side may carry `top`, `skip`, `filter` or `orderby`.
    /// Nested expansions are merged recursively.
    pub fn merge(&mut self, name: &str, other: QueryOptions) -> Result<()> {
        if self.has_query_options() && other.has_query_options() {
            return Err(Error::invalid_query_options(format!(
                "conflicting options for expand `{name}`"
            )));
        }

        if other.has_query_options() {
            self.top = other.top;
            self.skip = other.skip;
            self.order_by = other.order_by;
            self.filter = other.filter;
        }

        for (nested_name, nested) in other.expand {
            self.merge_expand(nested_name, nested)?;
        }

        Ok(())
    }
}
