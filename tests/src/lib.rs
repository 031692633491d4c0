//! Shared setup for the end-to-end tests: the fixture schema, its seed rows,
//! typed DTOs and a logging driver over the in-memory source.

mod exec_log;
pub use exec_log::ExecLog;

pub mod fixture;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};


pub mod views;

use std::sync::Once;
use vista::{Db, Schema};
use vista_driver_memory::Memory;

pub struct TestDb {
    pub db: Db,

    /// Driver operations issued after seeding
    pub log: ExecLog,
}

/// Builds a handle over the fixture schema and seeds it.
pub async fn setup() -> TestDb {
    setup_with(fixture::schema()).await
}

pub async fn setup_with(schema: Schema) -> TestDb {
    init_logging();

    let driver = LoggingDriver::new(Memory::new());
    let log = ExecLog::new(driver.ops_log_handle());

    let db = Db::builder().schema(schema).build(driver).await.unwrap();
    seed::seed(&db).await.unwrap();

    log.clear();

    TestDb { db, log }
}

/// Routes engine logs to the test harness. Filtered by `RUST_LOG`.
fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
