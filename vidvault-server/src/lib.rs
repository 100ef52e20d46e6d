//! # vidvault server
//!
//! Read-mostly HTTP API over the vidvault movie and TV catalog.
//!
//! Collections are served under `/api/v1`, paginated with a fixed page size
//! and annotated with `current_page` / `max_pages` headers. Filtering,
//! search-all and the info aggregates come from
//! [`vidvault_core::CatalogService`]; this crate adds configuration,
//! routing, response envelopes and error mapping.

pub mod app;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
