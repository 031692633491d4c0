#[macro_use]
mod macros;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod options;
pub use options::QueryOptions;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;

pub use async_trait::async_trait;
