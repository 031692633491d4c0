pub mod db;
pub use db::Db;

mod engine;
pub use engine::{ComposedQuery, Engine};

pub mod view;
pub use view::View;

pub use vista_core::{
    bail, driver, err, options, schema, stmt, Error, QueryOptions, Result, Schema,
};
