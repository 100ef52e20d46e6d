use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{NewTvShow, TvShow, TvShowId};

use crate::database::ports::filter::MediaColumn;
use crate::database::ports::tv_shows::TvShowRepository;
use crate::error::Result;

const TV_SHOW_COLUMNS: &str = "id, title, year, num_seasons, num_episodes, \
                               service, tag, url, date_added, image_url, \
                               description, avg_rating";

#[derive(Debug, Clone)]
pub struct PostgresTvShowRepository {
    pool: PgPool,
}

impl PostgresTvShowRepository {
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
    ) -> Result<Vec<TvShow>> {
        let sql = format!(
            "SELECT {TV_SHOW_COLUMNS} FROM tv_shows WHERE {predicate} \
             ORDER BY id"
        );
        let shows = sqlx::query_as::<_, TvShow>(&sql)
            .bind(value)
            .fetch_all(self.pool())
            .await?;
        Ok(shows)
    }
}

#[async_trait]
impl TvShowRepository for PostgresTvShowRepository {
    async fn list_all(&self) -> Result<Vec<TvShow>> {
        let sql =
            format!("SELECT {TV_SHOW_COLUMNS} FROM tv_shows ORDER BY id");
        let shows = sqlx::query_as::<_, TvShow>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(shows)
    }

    async fn get_by_id(&self, id: TvShowId) -> Result<Option<TvShow>> {
        let sql =
            format!("SELECT {TV_SHOW_COLUMNS} FROM tv_shows WHERE id = $1");
        let show = sqlx::query_as::<_, TvShow>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(show)
    }

    async fn filter_exact(
        &self,
        column: MediaColumn,
        value: &str,
    ) -> Result<Vec<TvShow>> {
        self.select_where(&format!("{} = $1", column.as_sql()), value)
            .await
    }

    async fn filter_like(
        &self,
        column: MediaColumn,
        pattern: &str,
    ) -> Result<Vec<TvShow>> {
        self.select_where(&format!("{} ILIKE $1", column.as_sql()), pattern)
            .await
    }

    async fn insert(&self, show: NewTvShow) -> Result<TvShow> {
        let sql = format!(
            r#"
            INSERT INTO tv_shows (
                title, year, num_seasons, num_episodes, service, tag, url,
                date_added, image_url, description, avg_rating
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {TV_SHOW_COLUMNS}
            "#
        );
        let show = sqlx::query_as::<_, TvShow>(&sql)
            .bind(show.title)
            .bind(show.year)
            .bind(show.num_seasons)
            .bind(show.num_episodes)
            .bind(show.service)
            .bind(show.tag)
            .bind(show.url)
            .bind(show.date_added)
            .bind(show.image_url)
            .bind(show.description)
            .bind(show.avg_rating)
            .fetch_one(self.pool())
            .await?;
        Ok(show)
    }
}
