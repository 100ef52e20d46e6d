use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{GenreId, MovieGenre, MovieId, TvShowGenre, TvShowId};

use crate::database::ports::genre_links::GenreLinksRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresGenreLinksRepository {
    pool: PgPool,
}

impl PostgresGenreLinksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreLinksRepository for PostgresGenreLinksRepository {
    async fn movies_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<MovieGenre>> {
        let links = sqlx::query_as::<_, MovieGenre>(
            "SELECT movie_id, genre_id FROM movie_genre \
             WHERE genre_id = $1 ORDER BY seq",
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn genres_of_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<MovieGenre>> {
        let links = sqlx::query_as::<_, MovieGenre>(
            "SELECT movie_id, genre_id FROM movie_genre \
             WHERE movie_id = $1 ORDER BY seq",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn tv_shows_with_genre(
        &self,
        genre_id: GenreId,
    ) -> Result<Vec<TvShowGenre>> {
        let links = sqlx::query_as::<_, TvShowGenre>(
            "SELECT tv_show_id, genre_id FROM tv_show_genre \
             WHERE genre_id = $1 ORDER BY seq",
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn genres_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<TvShowGenre>> {
        let links = sqlx::query_as::<_, TvShowGenre>(
            "SELECT tv_show_id, genre_id FROM tv_show_genre \
             WHERE tv_show_id = $1 ORDER BY seq",
        )
        .bind(tv_show_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    async fn link_movie(&self, link: MovieGenre) -> Result<()> {
        sqlx::query(
            "INSERT INTO movie_genre (movie_id, genre_id) VALUES ($1, $2)",
        )
        .bind(link.movie_id)
        .bind(link.genre_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn link_tv_show(&self, link: TvShowGenre) -> Result<()> {
        sqlx::query(
            "INSERT INTO tv_show_genre (tv_show_id, genre_id) \
             VALUES ($1, $2)",
        )
        .bind(link.tv_show_id)
        .bind(link.genre_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
