//! Repository ports (interfaces) for the catalog tables.
//!
//! Every port is object-safe and `Send + Sync` so the application can hold
//! them as `Arc<dyn Port>` inside [`CatalogUnitOfWork`]. Implementations live
//! in the PostgreSQL adapter and in [`InMemoryCatalog`].
//!
//! [`CatalogUnitOfWork`]: crate::application::unit_of_work::CatalogUnitOfWork
//! [`InMemoryCatalog`]: crate::database::memory::InMemoryCatalog

pub mod actors;
pub mod credits;
pub mod filter;
pub mod genre_links;
pub mod genres;
pub mod movies;
pub mod seasons;
pub mod tv_shows;
