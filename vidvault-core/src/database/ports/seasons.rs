use async_trait::async_trait;
use vidvault_model::{Episode, Season, TvShowId};

use crate::error::Result;

/// Season and episode tables of the show hierarchy.
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Seasons of a show ordered by season number.
    async fn seasons_for_show(&self, tv_show_id: TvShowId)
    -> Result<Vec<Season>>;

    /// Episodes of one season ordered by episode number.
    async fn episodes_for_season(
        &self,
        tv_show_id: TvShowId,
        season_number: i32,
    ) -> Result<Vec<Episode>>;

    async fn insert_season(&self, season: Season) -> Result<()>;

    async fn insert_episode(&self, episode: Episode) -> Result<()>;
}
