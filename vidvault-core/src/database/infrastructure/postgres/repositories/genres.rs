use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{Genre, GenreId, NewGenre};

use crate::database::ports::genres::GenreRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn list_all(&self) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            "SELECT id, genre_type FROM genre ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    async fn get_by_id(&self, id: GenreId) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, genre_type FROM genre WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    async fn find_by_name(&self, genre_type: &str) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, genre_type FROM genre WHERE genre_type = $1",
        )
        .bind(genre_type)
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    async fn insert(&self, genre: NewGenre) -> Result<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            "INSERT INTO genre (genre_type) VALUES ($1) \
             RETURNING id, genre_type",
        )
        .bind(genre.genre_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(genre)
    }
}
