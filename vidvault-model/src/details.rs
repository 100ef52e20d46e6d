//! Denormalised "info" views assembled from a title and its relations.

use crate::episodes::Episode;
use crate::ids::{MovieId, TvShowId};

/// A movie together with its genre names and cast.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieInfo {
    pub movie_id: MovieId,
    pub title: String,
    pub year: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: Vec<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub avg_rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpisodeInfo {
    pub episode: i32,
    pub episode_name: String,
    pub url: String,
}

impl From<Episode> for EpisodeInfo {
    fn from(episode: Episode) -> Self {
        Self {
            episode: episode.episode_number,
            episode_name: episode.episode_name,
            url: episode.url,
        }
    }
}

/// The episodes of one season, in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonInfo {
    pub season: i32,
    pub episodes: Vec<EpisodeInfo>,
}

/// A show together with genres, cast and its full season/episode tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TvShowInfo {
    pub tv_show_id: TvShowId,
    pub title: String,
    pub year: String,
    pub description: Option<String>,
    pub season_info: Vec<SeasonInfo>,
    pub stars: Vec<String>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub avg_rating: Option<f32>,
}
