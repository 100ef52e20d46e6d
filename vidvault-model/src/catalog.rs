use std::fmt;

use crate::media::{Movie, TvShow};

/// A record addressable by a totally ordered primary key.
///
/// Deduplication and ordering in the query layer rely only on this key,
/// never on whole-record equality.
pub trait CatalogEntity {
    type Id: Copy + Ord + fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// An entry of a cross-type result (search-all, recently added).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "media_type", rename_all = "snake_case")
)]
pub enum CatalogItem {
    Movie(Movie),
    TvShow(TvShow),
}

impl CatalogItem {
    pub fn is_movie(&self) -> bool {
        matches!(self, CatalogItem::Movie(_))
    }
}

impl From<Movie> for CatalogItem {
    fn from(movie: Movie) -> Self {
        CatalogItem::Movie(movie)
    }
}

impl From<TvShow> for CatalogItem {
    fn from(show: TvShow) -> Self {
        CatalogItem::TvShow(show)
    }
}
