use crate::ids::TvShowId;

/// One season of a show, keyed by `(tv_show_id, season_number)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Season {
    pub tv_show_id: TvShowId,
    pub season_number: i32,
    pub num_episodes: i32,
}

/// One episode, keyed by `(tv_show_id, season_id, episode_number)` where
/// `season_id` is the season number within the show.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Episode {
    pub tv_show_id: TvShowId,
    pub season_id: i32,
    pub episode_number: i32,
    pub episode_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewEpisode {
    pub episode_number: i32,
    pub episode_name: String,
    pub url: String,
}
