//! PostgreSQL-backed repository implementations.

pub mod actors;
pub mod credits;
pub mod genre_links;
pub mod genres;
pub mod movies;
pub mod seasons;
pub mod tv_shows;
