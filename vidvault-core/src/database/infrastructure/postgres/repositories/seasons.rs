use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{Episode, Season, TvShowId};

use crate::database::ports::seasons::SeasonRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresSeasonRepository {
    pool: PgPool,
}

impl PostgresSeasonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeasonRepository for PostgresSeasonRepository {
    async fn seasons_for_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<Season>> {
        let seasons = sqlx::query_as::<_, Season>(
            r#"
            SELECT tv_show_id, season_number, num_episodes
            FROM tv_show_seasons
            WHERE tv_show_id = $1
            ORDER BY season_number
            "#,
        )
        .bind(tv_show_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(seasons)
    }

    async fn episodes_for_season(
        &self,
        tv_show_id: TvShowId,
        season_number: i32,
    ) -> Result<Vec<Episode>> {
        let episodes = sqlx::query_as::<_, Episode>(
            r#"
            SELECT tv_show_id, season_id, episode_number, episode_name, url
            FROM tv_show_episodes
            WHERE tv_show_id = $1 AND season_id = $2
            ORDER BY episode_number
            "#,
        )
        .bind(tv_show_id)
        .bind(season_number)
        .fetch_all(&self.pool)
        .await?;
        Ok(episodes)
    }

    async fn insert_season(&self, season: Season) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tv_show_seasons (tv_show_id, season_number, num_episodes)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(season.tv_show_id)
        .bind(season.season_number)
        .bind(season.num_episodes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_episode(&self, episode: Episode) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tv_show_episodes (
                tv_show_id, season_id, episode_number, episode_name, url
            )
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(episode.tv_show_id)
        .bind(episode.season_id)
        .bind(episode.episode_number)
        .bind(episode.episode_name)
        .bind(episode.url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
