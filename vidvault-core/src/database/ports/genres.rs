use async_trait::async_trait;
use vidvault_model::{Genre, GenreId, NewGenre};

use crate::error::Result;

#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Genre>>;

    async fn get_by_id(&self, id: GenreId) -> Result<Option<Genre>>;

    /// Exact, case-sensitive lookup on `genre_type`.
    async fn find_by_name(&self, genre_type: &str) -> Result<Option<Genre>>;

    async fn insert(&self, genre: NewGenre) -> Result<Genre>;
}
