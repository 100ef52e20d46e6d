//! Adapters binding the database ports to concrete backends.

pub mod postgres;
