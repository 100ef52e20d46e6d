pub mod like;
pub mod memory;
pub mod ports;

#[cfg(feature = "database")]
pub mod infrastructure;
#[cfg(feature = "database")]
pub mod postgres;

pub use memory::InMemoryCatalog;
#[cfg(feature = "database")]
pub use postgres::{PoolStats, PostgresDatabase};
