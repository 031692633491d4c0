use super::LowerQuery;
use crate::{Error, Result};
use indexmap::IndexMap;
use vista_core::{options::QueryOptions, schema::mapping, stmt};

impl LowerQuery<'_> {
    /// Builds the projection: one expression per view member, in member
    /// order.
    ///
    /// Relations named in `expand` become nested queries; every other
    /// relation materializes its unexpanded default.
    pub(super) fn lower_returning(
        &self,
        expand: &IndexMap<String, QueryOptions>,
    ) -> Result<stmt::ExprRecord> {
        let view_model = self.view_model();
        let mut expanded: Vec<Option<QueryOptions>> = vec![None; view_model.fields.len()];

        for (name, options) in expand {
            let Some(index) = view_model.field_index(name) else {
                return Err(Error::unmapped_property(&view_model.name, name));
            };

            match self.mapping.field(index) {
                // Names differing only in case reach the same member
                mapping::Field::Relation(_) => match &mut expanded[index] {
                    Some(existing) => {
                        existing.merge(&view_model.fields[index].name, options.clone())?
                    }
                    None => expanded[index] = Some(options.clone()),
                },
                mapping::Field::Ignore(_) if view_model.fields[index].ty.is_relation() => {
                    return Err(Error::unmapped_property(&view_model.name, name));
                }
                _ => {
                    return Err(Error::unsupported_operator(format!(
                        "cannot expand `{name}` of view `{}`; it is not a relation",
                        view_model.name
                    )));
                }
            }
        }

        let mut returning = stmt::ExprRecord::default();

        for (index, field) in self.mapping.fields.iter().enumerate() {
            returning.push(match field {
                mapping::Field::Primitive(primitive) => stmt::Expr::field(primitive.path.clone()),
                mapping::Field::Param(param) => stmt::Expr::arg(&param.key, param.default.clone()),
                mapping::Field::Ignore(ignore) => stmt::Expr::Value(ignore.default.clone()),
                mapping::Field::Relation(relation) => match &expanded[index] {
                    Some(options) => {
                        self.lower_expansion(&view_model.fields[index].name, relation, options)?
                    }
                    None => stmt::Expr::Value(relation.unexpanded()),
                },
            });
        }

        Ok(returning)
    }

    fn lower_expansion(
        &self,
        name: &str,
        relation: &mapping::FieldRelation,
        options: &QueryOptions,
    ) -> Result<stmt::Expr> {
        if !relation.many && options.has_query_options() {
            return Err(Error::unsupported_operator(format!(
                "`{name}` is a single object; only `expand` may be nested under it"
            )));
        }

        let mapping = self.schema.mapping_for(relation.source, relation.view)?;
        let query = LowerQuery::new(self.schema, mapping).lower(
            options,
            stmt::Source::Field(relation.path.clone()),
            !relation.many,
        )?;

        Ok(stmt::Expr::stmt(query))
    }
}
