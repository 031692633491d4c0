//! DTOs materialized from the fixture's view models.

use uuid::Uuid;
use vista::{
    stmt::ValueRecord,
    view::{self, View},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct OpsCity {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpsBuilder {
    pub id: i64,
    pub name: String,
    pub city: Option<OpsCity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpsTenant {
    pub id: Uuid,
    pub name: String,
    pub buildings: Vec<CoreBuilding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoreBuilding {
    pub id: Uuid,
    pub name: String,
    pub builder: Option<OpsBuilder>,
    pub tenant: Option<OpsTenant>,
    pub builder_name: String,
    pub parameter: String,
}

impl View for OpsCity {
    const NAME: &'static str = "OpsCity";

    fn load(record: ValueRecord) -> Result<Self> {
        let [id, name] = view::fields(record)?;

        Ok(OpsCity {
            id: id.to_i64()?,
            name: name.to_string()?,
        })
    }
}

impl View for OpsBuilder {
    const NAME: &'static str = "OpsBuilder";

    fn load(record: ValueRecord) -> Result<Self> {
        let [id, name, city] = view::fields(record)?;

        Ok(OpsBuilder {
            id: id.to_i64()?,
            name: name.to_string()?,
            city: view::load_one(city)?,
        })
    }
}

impl View for OpsTenant {
    const NAME: &'static str = "OpsTenant";

    fn load(record: ValueRecord) -> Result<Self> {
        let [id, name, buildings] = view::fields(record)?;

        Ok(OpsTenant {
            id: id.to_uuid()?,
            name: name.to_string()?,
            buildings: view::load_many(buildings)?,
        })
    }
}

impl View for CoreBuilding {
    const NAME: &'static str = "CoreBuilding";

    fn load(record: ValueRecord) -> Result<Self> {
        let [id, name, builder, tenant, builder_name, parameter] = view::fields(record)?;

        Ok(CoreBuilding {
            id: id.to_uuid()?,
            name: name.to_string()?,
            builder: view::load_one(builder)?,
            tenant: view::load_one(tenant)?,
            builder_name: builder_name.to_string()?,
            parameter: parameter.to_string()?,
        })
    }
}

/// DTOs with a display name, for asserting on result order.
pub trait Named {
    fn name(&self) -> &str;
}

macro_rules! named {
    ( $( $ty:ident ),* ) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

named!(OpsCity, OpsBuilder, OpsTenant, CoreBuilding);

pub fn names<T: Named>(items: &[T]) -> Vec<&str> {
    items.iter().map(Named::name).collect()
}
