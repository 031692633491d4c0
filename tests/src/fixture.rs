//! The property-management schema used by the end-to-end tests.
//!
//! Source side: cities, builders, mandators (tenants) and buildings. A
//! building belongs to one builder and one mandator; a mandator has many
//! buildings. View side: `OpsCity`, `OpsBuilder`, `OpsTenant` and
//! `CoreBuilding`, with renamed members, a flattened `BuilderName` and a
//! `Parameter` member computed from runtime parameters.

use vista::{
    schema::{config::SchemaConfig, Builder},
    stmt::Type,
    Schema,
};

pub const SOURCE_CITY: &str = "TCity";
pub const SOURCE_BUILDER: &str = "TBuilder";
pub const SOURCE_MANDATOR: &str = "TMandator";
pub const SOURCE_BUILDING: &str = "TBuilding";

/// Parameter key read by `CoreBuilding.Parameter`
pub const PARAMETER: &str = "parameter";

/// Value of `CoreBuilding.Parameter` when no parameter is supplied
pub const PARAMETER_DEFAULT: &str = "unknown";

pub fn builder() -> Builder {
    let mut builder = Schema::builder();

    builder
        .source_model(SOURCE_CITY, |m| {
            m.primary_key("Id", Type::I64).field("Name", Type::String);
        })
        .source_model(SOURCE_BUILDER, |m| {
            m.primary_key("Id", Type::I64)
                .field("Name", Type::String)
                .field("CityId", Type::I64)
                .belongs_to("City", SOURCE_CITY, "CityId");
        })
        .source_model(SOURCE_MANDATOR, |m| {
            m.primary_key("Identity", Type::Uuid)
                .field("Name", Type::String)
                .has_many("Buildings", SOURCE_BUILDING, "Mandator");
        })
        .source_model(SOURCE_BUILDING, |m| {
            m.primary_key("Identity", Type::Uuid)
                .field("LongName", Type::String)
                .field("BuilderId", Type::I64)
                .belongs_to("Builder", SOURCE_BUILDER, "BuilderId")
                .field("MandatorId", Type::Uuid)
                .belongs_to("Mandator", SOURCE_MANDATOR, "MandatorId");
        });

    builder
        .view_model("OpsCity", |m| {
            m.field("Id", Type::I64).field("Name", Type::String);
        })
        .view_model("OpsBuilder", |m| {
            m.field("Id", Type::I64)
                .field("Name", Type::String)
                .object("City", "OpsCity");
        })
        .view_model("OpsTenant", |m| {
            m.field("Id", Type::Uuid)
                .field("Name", Type::String)
                .collection("Buildings", "CoreBuilding");
        })
        .view_model("CoreBuilding", |m| {
            m.field("Id", Type::Uuid)
                .field("Name", Type::String)
                .object("Builder", "OpsBuilder")
                .object("Tenant", "OpsTenant")
                .field("BuilderName", Type::String)
                .field("Parameter", Type::String);
        });

    builder
        .map(SOURCE_CITY, "OpsCity", |_| {})
        .map(SOURCE_BUILDER, "OpsBuilder", |_| {})
        .map(SOURCE_MANDATOR, "OpsTenant", |m| {
            m.from("Id", "Identity");
        })
        .map(SOURCE_BUILDING, "CoreBuilding", |m| {
            m.from("Id", "Identity")
                .from("Name", "LongName")
                .from("Tenant", "Mandator")
                .param("Parameter", PARAMETER, PARAMETER_DEFAULT);
        });

    builder
}

pub fn schema() -> Schema {
    builder()
        .build()
        .unwrap_or_else(|err| panic!("fixture schema is invalid: {err}"))
}

/// The same schema as [`schema`], registered from configuration.
pub const SCHEMA_JSON: &str = r#"
{
  "sources": [
    { "name": "TCity", "primary_key": "Id", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "i64" },
      { "kind": "primitive", "name": "Name", "ty": "string" }
    ]},
    { "name": "TBuilder", "primary_key": "Id", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "i64" },
      { "kind": "primitive", "name": "Name", "ty": "string" },
      { "kind": "primitive", "name": "CityId", "ty": "i64" },
      { "kind": "belongs_to", "name": "City", "target": "TCity", "foreign_key": "CityId" }
    ]},
    { "name": "TMandator", "primary_key": "Identity", "fields": [
      { "kind": "primitive", "name": "Identity", "ty": "uuid" },
      { "kind": "primitive", "name": "Name", "ty": "string" },
      { "kind": "has_many", "name": "Buildings", "target": "TBuilding", "pair": "Mandator" }
    ]},
    { "name": "TBuilding", "primary_key": "Identity", "fields": [
      { "kind": "primitive", "name": "Identity", "ty": "uuid" },
      { "kind": "primitive", "name": "LongName", "ty": "string" },
      { "kind": "primitive", "name": "BuilderId", "ty": "i64" },
      { "kind": "belongs_to", "name": "Builder", "target": "TBuilder", "foreign_key": "BuilderId" },
      { "kind": "primitive", "name": "MandatorId", "ty": "uuid" },
      { "kind": "belongs_to", "name": "Mandator", "target": "TMandator", "foreign_key": "MandatorId" }
    ]}
  ],
  "views": [
    { "name": "OpsCity", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "i64" },
      { "kind": "primitive", "name": "Name", "ty": "string" }
    ]},
    { "name": "OpsBuilder", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "i64" },
      { "kind": "primitive", "name": "Name", "ty": "string" },
      { "kind": "object", "name": "City", "target": "OpsCity" }
    ]},
    { "name": "OpsTenant", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "uuid" },
      { "kind": "primitive", "name": "Name", "ty": "string" },
      { "kind": "collection", "name": "Buildings", "target": "CoreBuilding" }
    ]},
    { "name": "CoreBuilding", "fields": [
      { "kind": "primitive", "name": "Id", "ty": "uuid" },
      { "kind": "primitive", "name": "Name", "ty": "string" },
      { "kind": "object", "name": "Builder", "target": "OpsBuilder" },
      { "kind": "object", "name": "Tenant", "target": "OpsTenant" },
      { "kind": "primitive", "name": "BuilderName", "ty": "string" },
      { "kind": "primitive", "name": "Parameter", "ty": "string" }
    ]}
  ],
  "mappings": [
    { "source": "TCity", "view": "OpsCity" },
    { "source": "TBuilder", "view": "OpsBuilder" },
    { "source": "TMandator", "view": "OpsTenant", "members": [
      { "kind": "from", "member": "Id", "path": "Identity" }
    ]},
    { "source": "TBuilding", "view": "CoreBuilding", "members": [
      { "kind": "from", "member": "Id", "path": "Identity" },
      { "kind": "from", "member": "Name", "path": "LongName" },
      { "kind": "from", "member": "Tenant", "path": "Mandator" },
      { "kind": "param", "member": "Parameter", "key": "parameter", "default": "unknown" }
    ]}
  ]
}
"#;

pub fn schema_from_json() -> Schema {
    SchemaConfig::from_json(SCHEMA_JSON)
        .and_then(|config| config.build())
        .unwrap_or_else(|err| panic!("fixture schema config is invalid: {err}"))
}
