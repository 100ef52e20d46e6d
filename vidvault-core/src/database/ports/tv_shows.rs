use async_trait::async_trait;
use vidvault_model::{NewTvShow, TvShow, TvShowId};

use crate::database::ports::filter::MediaColumn;
use crate::error::Result;

/// Read/insert access to the `tv_shows` table. All listings are ordered by id.
#[async_trait]
pub trait TvShowRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<TvShow>>;

    async fn get_by_id(&self, id: TvShowId) -> Result<Option<TvShow>>;

    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<TvShow>>;

    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<TvShow>>;

    async fn insert(&self, show: NewTvShow) -> Result<TvShow>;
}
