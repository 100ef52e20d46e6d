use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{Movie, MovieId, NewMovie};

use crate::database::ports::filter::MediaColumn;
use crate::database::ports::movies::MovieRepository;
use crate::error::Result;

const MOVIE_COLUMNS: &str = "id, title, year, service, tag, url, date_added, \
                             image_url, description, avg_rating";

#[derive(Debug, Clone)]
pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn select_where(
        &self,
        predicate: &str,
        value: &str,
    ) -> Result<Vec<Movie>> {
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE {predicate} ORDER BY id"
        );
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(value)
            .fetch_all(self.pool())
            .await?;
        Ok(movies)
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>> {
        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id");
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(movies)
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        let movie = sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(movie)
    }

    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<Movie>> {
        self.select_where(&format!("{} = $1", column.as_sql()), value)
            .await
    }

    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<Movie>> {
        self.select_where(&format!("{} ILIKE $1", column.as_sql()), pattern)
            .await
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let sql = format!(
            r#"
            INSERT INTO movies (
                title, year, service, tag, url, date_added,
                image_url, description, avg_rating
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {MOVIE_COLUMNS}
            "#
        );
        let movie = sqlx::query_as::<_, Movie>(&sql)
            .bind(movie.title)
            .bind(movie.year)
            .bind(movie.service)
            .bind(movie.tag)
            .bind(movie.url)
            .bind(movie.date_added)
            .bind(movie.image_url)
            .bind(movie.description)
            .bind(movie.avg_rating)
            .fetch_one(self.pool())
            .await?;
        Ok(movie)
    }
}
