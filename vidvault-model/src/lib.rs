//! Catalog records shared across the vidvault crates.
//!
//! The records mirror the relational catalog one-to-one: primary entities
//! ([`Movie`], [`TvShow`], [`Actor`], [`Genre`]), the many-to-many join rows
//! in [`links`], the show hierarchy in [`episodes`], and the denormalised
//! "info" aggregates in [`details`] that the query layer assembles.

pub mod catalog;
pub mod details;
pub mod episodes;
pub mod genre;
pub mod ids;
pub mod links;
pub mod media;
pub mod people;

pub use catalog::{CatalogEntity, CatalogItem};
pub use details::{EpisodeInfo, MovieInfo, SeasonInfo, TvShowInfo};
pub use episodes::{Episode, NewEpisode, Season};
pub use genre::{Genre, NewGenre};
pub use ids::{ActorId, GenreId, MovieId, TvShowId};
pub use links::{ActorMovie, ActorTvShow, MovieGenre, TvShowGenre};
pub use media::{Movie, NewMovie, NewTvShow, TvShow};
pub use people::{Actor, NewActor};
