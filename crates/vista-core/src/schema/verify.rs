use super::{mapping, source, view, Schema};
use crate::{Error, Result};
use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

pub(super) fn verify(schema: &Schema) -> Result<()> {
    Verify { schema }.verify()
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for model in self.schema.source.models() {
            self.verify_source_model(model)?;
        }

        for model in self.schema.view.models() {
            self.verify_view_model(model)?;
        }

        for model in self.schema.mapping.models() {
            self.verify_mapping(model)?;
        }

        Ok(())
    }

    fn verify_source_model(&self, model: &source::Model) -> Result<()> {
        verify_unique_names(&model.name, model.fields.iter().map(|field| &field.name[..]))?;

        let Some(pk_ty) = model.primary_key_field().ty.as_primitive() else {
            return Err(Error::invalid_schema(format!(
                "primary key of `{}` must be a primitive field",
                model.name
            )));
        };

        if pk_ty.is_null() {
            return Err(Error::invalid_schema(format!(
                "primary key of `{}` cannot have the null type",
                model.name
            )));
        }

        for field in &model.fields {
            match &field.ty {
                source::FieldTy::Primitive(ty) => {
                    if !ty.is_primitive() {
                        return Err(Error::invalid_schema(format!(
                            "field `{}.{}` must have a primitive type, got {ty:?}",
                            model.name, field.name
                        )));
                    }
                }
                source::FieldTy::BelongsTo(belongs_to) => {
                    self.verify_belongs_to(model, field, belongs_to)?
                }
                source::FieldTy::HasMany(has_many) => {
                    self.verify_has_many(model, field, has_many)?
                }
            }
        }

        Ok(())
    }

    fn verify_belongs_to(
        &self,
        model: &source::Model,
        field: &source::Field,
        belongs_to: &source::BelongsTo,
    ) -> Result<()> {
        let source = &self.schema.source;
        let target = source.model(belongs_to.target);

        let Some(fk_ty) = source.field(belongs_to.foreign_key).ty.as_primitive() else {
            return Err(Error::invalid_schema(format!(
                "foreign key of `{}.{}` must be a primitive field",
                model.name, field.name
            )));
        };

        let pk_ty = target.primary_key_field().ty.as_primitive();

        if Some(fk_ty) != pk_ty {
            return Err(Error::invalid_schema(format!(
                "foreign key of `{}.{}` is {fk_ty:?} but the primary key of `{}` is {:?}",
                model.name, field.name, target.name, pk_ty
            )));
        }

        Ok(())
    }

    fn verify_has_many(
        &self,
        model: &source::Model,
        field: &source::Field,
        has_many: &source::HasMany,
    ) -> Result<()> {
        let pair = self.schema.source.field(has_many.pair);

        match pair.ty.as_belongs_to() {
            Some(belongs_to) if belongs_to.target == model.id => Ok(()),
            _ => Err(Error::invalid_schema(format!(
                "pair of `{}.{}` must be a `BelongsTo` relation pointing back to `{}`",
                model.name, field.name, model.name
            ))),
        }
    }

    fn verify_view_model(&self, model: &view::Model) -> Result<()> {
        verify_unique_names(&model.name, model.fields.iter().map(|field| &field.name[..]))?;

        for field in &model.fields {
            if let view::FieldTy::Primitive(ty) = &field.ty {
                if !ty.is_primitive() {
                    return Err(Error::invalid_schema(format!(
                        "member `{}.{}` must have a primitive type, got {ty:?}",
                        model.name, field.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_mapping(&self, model: &mapping::Model) -> Result<()> {
        let view_model = self.schema.view.model(model.view);

        debug_assert_eq!(model.fields.len(), view_model.fields.len());

        for field in &model.fields {
            let mapping::Field::Relation(relation) = field else {
                continue;
            };

            if !self.schema.mapping.contains(relation.source, relation.view) {
                return Err(Error::invalid_schema(format!(
                    "no mapping registered from `{}` to `{}` (needed by `{}`)",
                    self.schema.source.model(relation.source).name,
                    self.schema.view.model(relation.view).name,
                    view_model.name
                )));
            }
        }

        Ok(())
    }
}

fn verify_unique_names<'a>(model: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(Error::invalid_schema(format!(
                "duplicate field `{name}` in `{model}`"
            )));
        }
    }

    Ok(())
}
