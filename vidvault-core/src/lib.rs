//! Core library for vidvault.
//!
//! The catalog is reached exclusively through repository ports bundled in a
//! [`CatalogUnitOfWork`]; [`CatalogService`] composes them into resolvers,
//! search-all, info aggregates and pagination-ready result lists.
//!
//! ```no_run
//! use vidvault_core::{CatalogService, CatalogUnitOfWork, InMemoryCatalog};
//!
//! # async fn demo() -> vidvault_core::Result<()> {
//! let service =
//!     CatalogService::new(CatalogUnitOfWork::in_memory(InMemoryCatalog::new()));
//! let hits = service.search_all("star").await?;
//! println!("{} matches", hits.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Route paths and header names shared by the server and its clients
pub mod api;
pub mod application;
pub mod database;
pub mod error;
pub mod query;

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use application::unit_of_work::CatalogUnitOfWork;
pub use database::InMemoryCatalog;
#[cfg(feature = "database")]
pub use database::PostgresDatabase;
pub use error::{CatalogError, Result};
pub use query::{ActorFilter, CatalogService, MediaFilter, Page};
