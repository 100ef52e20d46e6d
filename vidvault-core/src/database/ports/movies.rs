use async_trait::async_trait;
use vidvault_model::{Movie, MovieId, NewMovie};

use crate::database::ports::filter::MediaColumn;
use crate::error::Result;

/// Read/insert access to the `movies` table. All listings are ordered by id.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Movie>>;

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Case-sensitive equality against the stored value.
    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<Movie>>;

    /// Case-insensitive SQL `LIKE` match; `pattern` carries its own
    /// wildcards.
    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<Movie>>;

    async fn insert(&self, movie: NewMovie) -> Result<Movie>;
}
