use super::*;
use crate::{
    options::Path,
    schema::Schema,
    stmt::{Expr, ExprField, Type},
    Error, Result,
};

/// What a view property path resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A stored source value
    Primitive { field: ExprField, ty: Type },

    /// A source relation, for existence checks, lambdas and expansion
    Relation {
        field: ExprField,
        source: source::ModelId,
        view: view::ModelId,
        many: bool,
    },

    /// A computed member; `expr` is the expression producing its value
    Computed { expr: Expr, ty: Type },
}

impl Resolved {
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Self::Primitive { ty, .. } | Self::Computed { ty, .. } => Some(ty),
            Self::Relation { .. } => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }
}

impl Model {
    /// Resolves `path`, expressed in this mapping's view vocabulary, to the
    /// source expression producing it.
    ///
    /// Every step but the last must be a single-object relation. Field
    /// expressions of nested steps are joined so the result is relative to
    /// this mapping's source row.
    pub fn resolve_path(&self, schema: &Schema, path: &Path) -> Result<Resolved> {
        let unmapped = || {
            Error::unmapped_property(&schema.view.model(self.view).name, path.to_string())
        };

        let mut mapping = self;
        let mut prefix = ExprField::default();

        let Some((last, init)) = path.steps().split_last() else {
            return Err(unmapped());
        };

        for step in init {
            let view_model = schema.view.model(mapping.view);
            let index = view_model.field_index(step).ok_or_else(unmapped)?;

            let Field::Relation(relation) = mapping.field(index) else {
                // Primitives and computed members have nothing to descend into
                return Err(unmapped());
            };

            if relation.many {
                return Err(Error::unsupported_operator(format!(
                    "cannot navigate through collection `{}` in `{}`; use any/all",
                    view_model.fields[index].name, path
                )));
            }

            prefix = prefix.join(&relation.path);
            mapping = schema.mapping_for(relation.source, relation.view)?;
        }

        let view_model = schema.view.model(mapping.view);
        let index = view_model.field_index(last).ok_or_else(unmapped)?;

        Ok(match mapping.field(index) {
            Field::Primitive(primitive) => Resolved::Primitive {
                field: prefix.join(&primitive.path),
                ty: primitive.ty.clone(),
            },
            Field::Relation(relation) => Resolved::Relation {
                field: prefix.join(&relation.path),
                source: relation.source,
                view: relation.view,
                many: relation.many,
            },
            Field::Param(param) => Resolved::Computed {
                expr: Expr::arg(&param.key, param.default.clone()),
                ty: param.ty.clone(),
            },
            Field::Ignore(ignore) => Resolved::Computed {
                expr: Expr::Value(ignore.default.clone()),
                ty: ignore.ty.clone(),
            },
        })
    }
}
