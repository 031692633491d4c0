//! Declarative schema registration.
//!
//! A [`SchemaConfig`] describes the same source models, view models and
//! mappings as [`Builder`](super::Builder), in a form that can be loaded
//! from JSON:
//!
//! ```json
//! {
//!   "sources": [
//!     { "name": "TCity", "primary_key": "Id", "fields": [
//!       { "kind": "primitive", "name": "Id", "ty": "i64" },
//!       { "kind": "primitive", "name": "Name", "ty": "string" }
//!     ]}
//!   ],
//!   "views": [
//!     { "name": "OpsCity", "fields": [
//!       { "kind": "primitive", "name": "Id", "ty": "i64" },
//!       { "kind": "primitive", "name": "Name", "ty": "string" }
//!     ]}
//!   ],
//!   "mappings": [ { "source": "TCity", "view": "OpsCity" } ]
//! }
//! ```

use super::{Builder, Schema};
use crate::{
    stmt::{Type, Value},
    Error, Result,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default)]
    pub sources: Vec<SourceModelConfig>,

    #[serde(default)]
    pub views: Vec<ViewModelConfig>,

    #[serde(default)]
    pub mappings: Vec<MappingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceModelConfig {
    pub name: String,
    pub primary_key: String,
    pub fields: Vec<SourceFieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SourceFieldConfig {
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

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewModelConfig {
    pub name: String,
    pub fields: Vec<ViewFieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ViewFieldConfig {
    Primitive { name: String, ty: Type },
    Object { name: String, target: String },
    Collection { name: String, target: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    pub source: String,
    pub view: String,

    #[serde(default)]
    pub members: Vec<MemberConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum MemberConfig {
    /// Read the member from a source path
    From { member: String, path: String },

    /// Compute the member from a runtime parameter
    Param {
        member: String,
        key: String,
        #[serde(default)]
        default: serde_json::Value,
    },

    /// Leave the member unmapped
    Ignore { member: String },
}

impl SchemaConfig {
    pub fn from_json(src: &str) -> Result<SchemaConfig> {
        serde_json::from_str(src).map_err(|err| {
            Error::from(err).context(Error::invalid_schema("malformed schema config"))
        })
    }

    /// Converts the configuration into registration calls on a [`Builder`].
    pub fn to_builder(&self) -> Result<Builder> {
        let mut builder = Schema::builder();

        for model in &self.sources {
            builder.source_model(&model.name, |m| {
                for field in &model.fields {
                    match field {
                        SourceFieldConfig::Primitive { name, ty } if *name == model.primary_key => {
                            m.primary_key(name, ty.clone());
                        }
                        SourceFieldConfig::Primitive { name, ty } => {
                            m.field(name, ty.clone());
                        }
                        SourceFieldConfig::BelongsTo {
                            name,
                            target,
                            foreign_key,
                        } => {
                            m.belongs_to(name, target, foreign_key);
                        }
                        SourceFieldConfig::HasMany { name, target, pair } => {
                            m.has_many(name, target, pair);
                        }
                    }
                }
            });
        }

        for model in &self.views {
            builder.view_model(&model.name, |m| {
                for field in &model.fields {
                    match field {
                        ViewFieldConfig::Primitive { name, ty } => {
                            m.field(name, ty.clone());
                        }
                        ViewFieldConfig::Object { name, target } => {
                            m.object(name, target);
                        }
                        ViewFieldConfig::Collection { name, target } => {
                            m.collection(name, target);
                        }
                    }
                }
            });
        }

        for mapping in &self.mappings {
            let mut defaults = Vec::with_capacity(mapping.members.len());

            for member in &mapping.members {
                if let MemberConfig::Param { member, default, .. } = member {
                    defaults.push(json_to_value(default).map_err(|err| {
                        err.context(Error::invalid_schema(format!(
                            "default for member `{member}` of `{}`",
                            mapping.view
                        )))
                    })?);
                }
            }

            let mut defaults = defaults.into_iter();

            builder.map(&mapping.source, &mapping.view, |m| {
                for member in &mapping.members {
                    match member {
                        MemberConfig::From { member, path } => {
                            m.from(member, path);
                        }
                        MemberConfig::Param { member, key, .. } => {
                            m.param(member, key, defaults.next().unwrap_or_default());
                        }
                        MemberConfig::Ignore { member } => {
                            m.ignore(member);
                        }
                    }
                }
            });
        }

        Ok(builder)
    }

    pub fn build(&self) -> Result<Schema> {
        self.to_builder()?.build()
    }
}

/// Converts a JSON scalar into a [`Value`]. Strings that parse as a GUID stay
/// strings; the mapping's member type decides how they are interpreted.
fn json_to_value(value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(value) => Ok(Value::Bool(*value)),
        serde_json::Value::String(value) => Ok(Value::String(value.clone())),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(value) => Ok(Value::I64(value)),
            None => Err(crate::err!("number {number} is not a 64-bit integer")),
        },
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(crate::err!("only scalar defaults are supported"))
        }
    }
}
