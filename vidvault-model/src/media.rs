use chrono::NaiveDate;

use crate::catalog::CatalogEntity;
use crate::ids::{MovieId, TvShowId};

/// A movie row.
///
/// `year` is kept as the stored four-digit string so year filters compare
/// exactly what the catalog holds. The long-form `description` is only
/// emitted by the info view, never by collection listings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    pub service: String,
    pub tag: String,
    pub url: String,
    pub date_added: NaiveDate,
    pub image_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing, default))]
    pub description: Option<String>,
    pub avg_rating: Option<f32>,
}

impl CatalogEntity for Movie {
    type Id = MovieId;

    fn id(&self) -> MovieId {
        self.id
    }
}

/// Insert payload for [`Movie`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewMovie {
    pub title: String,
    pub year: String,
    pub service: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
    pub date_added: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_rating: Option<f32>,
}

impl NewMovie {
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            service: self.service,
            tag: self.tag,
            url: self.url,
            date_added: self.date_added,
            image_url: self.image_url,
            description: self.description,
            avg_rating: self.avg_rating,
        }
    }
}

/// A TV show row.
///
/// `year` holds one of three shapes: `"2017"`, `"2012-2015"` or the
/// open-ended `"2019-"` for shows still running.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TvShow {
    pub id: TvShowId,
    pub title: String,
    pub year: String,
    pub num_seasons: i32,
    pub num_episodes: i32,
    pub service: String,
    pub tag: String,
    pub url: String,
    pub date_added: NaiveDate,
    pub image_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing, default))]
    pub description: Option<String>,
    pub avg_rating: Option<f32>,
}

impl CatalogEntity for TvShow {
    type Id = TvShowId;

    fn id(&self) -> TvShowId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewTvShow {
    pub title: String,
    pub year: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_seasons: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_episodes: i32,
    pub service: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
    pub date_added: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_rating: Option<f32>,
}

impl NewTvShow {
    pub fn into_show(self, id: TvShowId) -> TvShow {
        TvShow {
            id,
            title: self.title,
            year: self.year,
            num_seasons: self.num_seasons,
            num_episodes: self.num_episodes,
            service: self.service,
            tag: self.tag,
            url: self.url,
            date_added: self.date_added,
            image_url: self.image_url,
            description: self.description,
            avg_rating: self.avg_rating,
        }
    }
}
