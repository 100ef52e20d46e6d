//! Query composition over the catalog store.
//!
//! [`CatalogService`] owns a [`CatalogUnitOfWork`] and exposes resolvers,
//! search-all, info aggregates, recently-added and actor lookups as plain
//! `Vec`-returning operations. Pagination is applied by callers through
//! [`paginate`].
//!
//! [`CatalogUnitOfWork`]: crate::application::unit_of_work::CatalogUnitOfWork

pub mod aggregate;
pub mod filters;
pub mod merge;
pub mod pagination;
pub mod people;
pub mod recent;
pub mod resolvers;
pub mod search;
pub mod service;
pub mod writes;
pub mod years_running;

pub use filters::{ActorFilter, MediaFilter};
pub use merge::merge_unique_by_id;
pub use pagination::{Page, max_pages, normalize_page, paginate};
pub use service::CatalogService;
pub use years_running::{RunSpan, years_running};
