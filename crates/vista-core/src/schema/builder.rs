use super::{mapping, source, verify, view, Mapping, Schema};
use crate::{
    stmt::{ExprField, Type, Value},
    Error, Result,
};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Registers source models, view models and the mappings between them.
///
/// Models refer to each other by name, so registration order does not
/// matter. [`Builder::build`] resolves names, applies mapping conventions and
/// verifies the result.
///
/// View members map by convention to the source field of the same name
/// (exact match first, then case-insensitive). A member with no same-named
/// source field is matched by flattening: `BuilderName` maps to
/// `Builder.Name` when `Builder` is a `BelongsTo` relation.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    sources: Vec<SourceModelBuilder>,
    views: Vec<ViewModelBuilder>,
    mappings: Vec<MappingBuilder>,
}

#[derive(Debug, Clone)]
pub struct SourceModelBuilder {
    name: String,
    primary_key: Option<String>,
    fields: Vec<SourceFieldDef>,
}

#[derive(Debug, Clone)]
enum SourceFieldDef {
    Primitive {
        name: String,
        ty: Type,
    },
    BelongsTo {
        name: String,
        target: String,
        foreign_key: String,
    },
    HasMany {
        name: String,
        target: String,
        pair: String,
    },
}

#[derive(Debug, Clone)]
pub struct ViewModelBuilder {
    name: String,
    fields: Vec<(String, ViewFieldDef)>,
}

#[derive(Debug, Clone)]
enum ViewFieldDef {
    Primitive(Type),
    Object(String),
    Collection(String),
}

#[derive(Debug, Clone)]
pub struct MappingBuilder {
    source: String,
    view: String,
    members: Vec<(String, MemberDef)>,
}

#[derive(Debug, Clone)]
enum MemberDef {
    From(String),
    Param { key: String, default: Value },
    Ignore,
}

impl Builder {
    pub fn source_model(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut SourceModelBuilder),
    ) -> &mut Self {
        let mut model = SourceModelBuilder {
            name: name.into(),
            primary_key: None,
            fields: vec![],
        };
        f(&mut model);
        self.sources.push(model);
        self
    }

    pub fn view_model(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut ViewModelBuilder),
    ) -> &mut Self {
        let mut model = ViewModelBuilder {
            name: name.into(),
            fields: vec![],
        };
        f(&mut model);
        self.views.push(model);
        self
    }

    /// Registers the mapping that reads `view` from `source`. Members not
    /// configured in `f` are mapped by convention.
    pub fn map(
        &mut self,
        source: impl Into<String>,
        view: impl Into<String>,
        f: impl FnOnce(&mut MappingBuilder),
    ) -> &mut Self {
        let mut mapping = MappingBuilder {
            source: source.into(),
            view: view.into(),
            members: vec![],
        };
        f(&mut mapping);
        self.mappings.push(mapping);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let source = self.build_source()?;
        let view = self.build_view()?;

        let mut mapping = Mapping::default();

        for def in &self.mappings {
            let model = build_mapping(&source, &view, def)?;
            let key = (model.source, model.view);

            if mapping.models.contains_key(&key) {
                return Err(Error::invalid_schema(format!(
                    "duplicate mapping from `{}` to `{}`",
                    def.source, def.view
                )));
            }

            mapping.models.insert(key, model);
        }

        let schema = Schema {
            source: Arc::new(source),
            view,
            mapping,
        };

        verify::verify(&schema)?;

        debug!(
            source_models = schema.source.models.len(),
            view_models = schema.view.models.len(),
            mappings = schema.mapping.models.len(),
            "schema built"
        );

        Ok(schema)
    }

    fn build_source(&self) -> Result<source::Schema> {
        let ids = model_ids(self.sources.iter().map(|def| &def.name[..]), "source")?;
        let mut models = Vec::with_capacity(self.sources.len());

        for (index, def) in self.sources.iter().enumerate() {
            let id = source::ModelId(index);
            let mut fields = Vec::with_capacity(def.fields.len());

            for (index, field) in def.fields.iter().enumerate() {
                let ty = match field {
                    SourceFieldDef::Primitive { ty, .. } => source::FieldTy::Primitive(ty.clone()),
                    SourceFieldDef::BelongsTo {
                        target,
                        foreign_key,
                        ..
                    } => source::FieldTy::BelongsTo(source::BelongsTo {
                        target: source::ModelId(lookup(&ids, target, "source model")?),
                        foreign_key: id.field(def.field_index(foreign_key).ok_or_else(|| {
                            Error::invalid_schema(format!(
                                "foreign key `{foreign_key}` of `{}.{}` is not a field of `{}`",
                                def.name,
                                field.name(),
                                def.name
                            ))
                        })?),
                    }),
                    SourceFieldDef::HasMany { target, pair, .. } => {
                        let target_id = source::ModelId(lookup(&ids, target, "source model")?);
                        let target_def = &self.sources[target_id.0];
                        let pair_index = target_def.field_index(pair).ok_or_else(|| {
                            Error::invalid_schema(format!(
                                "pair `{pair}` of `{}.{}` is not a field of `{target}`",
                                def.name,
                                field.name()
                            ))
                        })?;

                        source::FieldTy::HasMany(source::HasMany {
                            target: target_id,
                            pair: target_id.field(pair_index),
                        })
                    }
                };

                fields.push(source::Field {
                    id: id.field(index),
                    name: field.name().to_string(),
                    ty,
                });
            }

            let Some(primary_key) = &def.primary_key else {
                return Err(Error::invalid_schema(format!(
                    "source model `{}` has no primary key",
                    def.name
                )));
            };

            let primary_key = def.field_index(primary_key).ok_or_else(|| {
                Error::invalid_schema(format!(
                    "primary key `{primary_key}` is not a field of `{}`",
                    def.name
                ))
            })?;

            models.push(source::Model {
                id,
                name: def.name.clone(),
                fields,
                primary_key: id.field(primary_key),
            });
        }

        Ok(source::Schema { models })
    }

    fn build_view(&self) -> Result<view::Schema> {
        let ids = model_ids(self.views.iter().map(|def| &def.name[..]), "view")?;

        let mut models = Vec::with_capacity(self.views.len());

        for (index, def) in self.views.iter().enumerate() {
            let mut fields = Vec::with_capacity(def.fields.len());

            for (name, field) in &def.fields {
                let ty = match field {
                    ViewFieldDef::Primitive(ty) => view::FieldTy::Primitive(ty.clone()),
                    ViewFieldDef::Object(target) => {
                        view::FieldTy::Object(view::ModelId(lookup(&ids, target, "view model")?))
                    }
                    ViewFieldDef::Collection(target) => view::FieldTy::Collection(view::ModelId(
                        lookup(&ids, target, "view model")?,
                    )),
                };

                fields.push(view::Field {
                    name: name.clone(),
                    ty,
                });
            }

            models.push(view::Model {
                id: view::ModelId(index),
                name: def.name.clone(),
                fields,
            });
        }

        Ok(view::Schema { models })
    }
}

impl SourceModelBuilder {
    /// Adds the primitive field holding the model's key.
    pub fn primary_key(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        let name = name.into();
        self.primary_key = Some(name.clone());
        self.field(name, ty)
    }

    pub fn field(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.fields.push(SourceFieldDef::Primitive {
            name: name.into(),
            ty,
        });
        self
    }

    /// Adds a single-object relation to `target`, keyed by this model's
    /// `foreign_key` field.
    pub fn belongs_to(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(SourceFieldDef::BelongsTo {
            name: name.into(),
            target: target.into(),
            foreign_key: foreign_key.into(),
        });
        self
    }

    /// Adds a collection relation to `target`. `pair` names the `BelongsTo`
    /// field on `target` pointing back to this model.
    pub fn has_many(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        pair: impl Into<String>,
    ) -> &mut Self {
        self.fields.push(SourceFieldDef::HasMany {
            name: name.into(),
            target: target.into(),
            pair: pair.into(),
        });
        self
    }

    fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }
}

impl SourceFieldDef {
    fn name(&self) -> &str {
        match self {
            Self::Primitive { name, .. }
            | Self::BelongsTo { name, .. }
            | Self::HasMany { name, .. } => name,
        }
    }
}

impl ViewModelBuilder {
    pub fn field(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.fields.push((name.into(), ViewFieldDef::Primitive(ty)));
        self
    }

    /// Adds a nested single object of the view model `target`.
    pub fn object(&mut self, name: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), ViewFieldDef::Object(target.into())));
        self
    }

    /// Adds a nested collection of the view model `target`.
    pub fn collection(&mut self, name: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.fields
            .push((name.into(), ViewFieldDef::Collection(target.into())));
        self
    }
}

impl MappingBuilder {
    /// Reads `member` from a source path such as `LongName` or
    /// `Builder.City.Name`. Steps may be separated by `.` or `/`.
    pub fn from(&mut self, member: impl Into<String>, path: impl Into<String>) -> &mut Self {
        self.members.push((member.into(), MemberDef::From(path.into())));
        self
    }

    /// Computes `member` from the runtime parameter `key`, using `default`
    /// when the parameter is absent.
    pub fn param(
        &mut self,
        member: impl Into<String>,
        key: impl Into<String>,
        default: impl Into<Value>,
    ) -> &mut Self {
        self.members.push((
            member.into(),
            MemberDef::Param {
                key: key.into(),
                default: default.into(),
            },
        ));
        self
    }

    /// Leaves `member` unmapped. It always materializes its default.
    pub fn ignore(&mut self, member: impl Into<String>) -> &mut Self {
        self.members.push((member.into(), MemberDef::Ignore));
        self
    }
}

/// Assigns each model its declaration index, rejecting duplicate names.
fn model_ids<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: &str,
) -> Result<IndexMap<&'a str, usize>> {
    let mut ids = IndexMap::new();

    for (index, name) in names.enumerate() {
        if ids.insert(name, index).is_some() {
            return Err(Error::invalid_schema(format!(
                "duplicate {kind} model `{name}`"
            )));
        }
    }

    Ok(ids)
}

fn lookup(ids: &IndexMap<&str, usize>, name: &str, kind: &str) -> Result<usize> {
    ids.get(name)
        .copied()
        .ok_or_else(|| Error::invalid_schema(format!("unknown {kind} `{name}`")))
}

fn build_mapping(
    source: &source::Schema,
    view: &view::Schema,
    def: &MappingBuilder,
) -> Result<mapping::Model> {
    let Some(source_model) = source.model_by_name(&def.source) else {
        return Err(Error::invalid_schema(format!(
            "mapping refers to unknown source model `{}`",
            def.source
        )));
    };

    let Some(view_model) = view.model_by_name(&def.view) else {
        return Err(Error::invalid_schema(format!(
            "mapping refers to unknown view model `{}`",
            def.view
        )));
    };

    // Configured members, keyed by view field index
    let mut members = IndexMap::new();

    for (member, member_def) in &def.members {
        let Some(index) = view_model.field_index(member) else {
            return Err(Error::invalid_schema(format!(
                "`{member}` is not a member of view `{}`",
                view_model.name
            )));
        };

        if members.insert(index, member_def).is_some() {
            return Err(Error::invalid_schema(format!(
                "member `{member}` of view `{}` is configured more than once",
                view_model.name
            )));
        }
    }

    let mut fields = Vec::with_capacity(view_model.fields.len());

    for (index, field) in view_model.fields.iter().enumerate() {
        let mapped = match members.get(&index) {
            Some(MemberDef::Param { key, default }) => {
                let view::FieldTy::Primitive(ty) = &field.ty else {
                    return Err(Error::invalid_schema(format!(
                        "member `{}.{}` is a relation and cannot be computed from a parameter",
                        view_model.name, field.name
                    )));
                };

                let Some(default) = ty.coerce(default.clone()) else {
                    return Err(Error::invalid_schema(format!(
                        "default for `{}.{}` must be {ty:?}, got {:?}",
                        view_model.name,
                        field.name,
                        default.infer_ty()
                    )));
                };

                mapping::Field::Param(mapping::FieldParam {
                    key: key.clone(),
                    default,
                    ty: ty.clone(),
                })
            }
            Some(MemberDef::Ignore) => mapping::Field::Ignore(match &field.ty {
                view::FieldTy::Primitive(ty) => mapping::FieldIgnore {
                    default: Value::Null,
                    ty: ty.clone(),
                },
                view::FieldTy::Object(_) => mapping::FieldIgnore {
                    default: Value::Null,
                    ty: Type::Null,
                },
                view::FieldTy::Collection(_) => mapping::FieldIgnore {
                    default: Value::List(vec![]),
                    ty: Type::Null,
                },
            }),
            Some(MemberDef::From(path)) => {
                let path = resolve_source_path(source, source_model, path)?;
                map_member(source, view_model, field, path)?
            }
            None => {
                let Some(path) = resolve_by_convention(source, source_model.id, &field.name)
                else {
                    return Err(Error::invalid_schema(format!(
                        "member `{}.{}` has no counterpart on source `{}`; map or ignore it",
                        view_model.name, field.name, source_model.name
                    )));
                };

                map_member(source, view_model, field, path)?
            }
        };

        fields.push(mapped);
    }

    Ok(mapping::Model {
        source: source_model.id,
        view: view_model.id,
        fields,
    })
}

/// Resolves an explicitly configured source path. Every step but the last
/// must be a `BelongsTo` relation.
fn resolve_source_path(
    source: &source::Schema,
    model: &source::Model,
    path: &str,
) -> Result<ExprField> {
    let steps: Vec<_> = path.split(['.', '/']).collect();
    let mut current = model;
    let mut fields = Vec::with_capacity(steps.len());

    for (i, step) in steps.iter().enumerate() {
        let Some(field) = current.field_by_name(step) else {
            return Err(Error::invalid_schema(format!(
                "source path `{path}`: `{step}` is not a field of `{}`",
                current.name
            )));
        };

        fields.push(field.id);

        if i + 1 < steps.len() {
            let Some(belongs_to) = field.ty.as_belongs_to() else {
                return Err(Error::invalid_schema(format!(
                    "source path `{path}`: `{}.{step}` is not a single-object relation",
                    current.name
                )));
            };

            current = source.model(belongs_to.target);
        }
    }

    Ok(ExprField::new(fields))
}

/// Finds the source path for a view member by name, flattening through
/// `BelongsTo` relations when there is no direct match.
fn resolve_by_convention(
    source: &source::Schema,
    model: source::ModelId,
    member: &str,
) -> Option<ExprField> {
    let model = source.model(model);

    if let Some(field) = model.field_by_name(member) {
        return Some(field.id.into());
    }

    for field in &model.fields {
        let Some(belongs_to) = field.ty.as_belongs_to() else {
            continue;
        };

        let Some(prefix) = member.get(..field.name.len()) else {
            continue;
        };

        let rest = &member[field.name.len()..];

        if rest.is_empty() || !prefix.eq_ignore_ascii_case(&field.name) {
            continue;
        }

        if let Some(nested) = resolve_by_convention(source, belongs_to.target, rest) {
            return Some(ExprField::from(field.id).join(&nested));
        }
    }

    None
}

fn map_member(
    source: &source::Schema,
    view_model: &view::Model,
    field: &view::Field,
    path: ExprField,
) -> Result<mapping::Field> {
    let Some(last) = path.last() else {
        return Err(Error::invalid_schema(format!(
            "member `{}.{}` maps to an empty source path",
            view_model.name, field.name
        )));
    };

    let source_field = source.field(last);

    let mismatch = |expected: &str| {
        Error::invalid_schema(format!(
            "member `{}.{}` is {expected} but source field `{}.{}` is not",
            view_model.name,
            field.name,
            source.model(last.model).name,
            source_field.name
        ))
    };

    Ok(match (&field.ty, &source_field.ty) {
        (view::FieldTy::Primitive(ty), source::FieldTy::Primitive(source_ty)) => {
            if ty != source_ty {
                return Err(Error::invalid_schema(format!(
                    "member `{}.{}` is {ty:?} but source field `{}` is {source_ty:?}",
                    view_model.name, field.name, source_field.name
                )));
            }

            mapping::Field::Primitive(mapping::FieldPrimitive {
                path,
                ty: ty.clone(),
            })
        }
        (view::FieldTy::Primitive(_), _) => return Err(mismatch("a scalar")),
        (view::FieldTy::Object(target), source::FieldTy::BelongsTo(belongs_to)) => {
            mapping::Field::Relation(mapping::FieldRelation {
                path,
                source: belongs_to.target,
                view: *target,
                many: false,
            })
        }
        (view::FieldTy::Object(_), _) => return Err(mismatch("a single object")),
        (view::FieldTy::Collection(target), source::FieldTy::HasMany(has_many)) => {
            mapping::Field::Relation(mapping::FieldRelation {
                path,
                source: has_many.target,
                view: *target,
                many: true,
            })
        }
        (view::FieldTy::Collection(_), _) => return Err(mismatch("a collection")),
    })
}
