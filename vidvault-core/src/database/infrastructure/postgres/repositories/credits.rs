use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{ActorId, ActorMovie, ActorTvShow, MovieId, TvShowId};

use crate::database::ports::credits::CreditsRepository;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresCreditsRepository {
    pool: PgPool,
}

impl PostgresCreditsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditsRepository for PostgresCreditsRepository {
    async fn movies_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorMovie>> {
        let credits = sqlx::query_as::<_, ActorMovie>(
            "SELECT movie_id, actor_id FROM movie_actors \
             WHERE actor_id = $1 ORDER BY seq",
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(credits)
    }

    async fn cast_of_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Vec<ActorMovie>> {
        let credits = sqlx::query_as::<_, ActorMovie>(
            "SELECT movie_id, actor_id FROM movie_actors \
             WHERE movie_id = $1 ORDER BY seq",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(credits)
    }

    async fn tv_shows_of_actor(
        &self,
        actor_id: ActorId,
    ) -> Result<Vec<ActorTvShow>> {
        let credits = sqlx::query_as::<_, ActorTvShow>(
            "SELECT tv_show_id, actor_id FROM tv_show_actors \
             WHERE actor_id = $1 ORDER BY seq",
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(credits)
    }

    async fn cast_of_tv_show(
        &self,
        tv_show_id: TvShowId,
    ) -> Result<Vec<ActorTvShow>> {
        let credits = sqlx::query_as::<_, ActorTvShow>(
            "SELECT tv_show_id, actor_id FROM tv_show_actors \
             WHERE tv_show_id = $1 ORDER BY seq",
        )
        .bind(tv_show_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(credits)
    }

    async fn credit_movie(&self, credit: ActorMovie) -> Result<()> {
        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)",
        )
        .bind(credit.movie_id)
        .bind(credit.actor_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn credit_tv_show(&self, credit: ActorTvShow) -> Result<()> {
        sqlx::query(
            "INSERT INTO tv_show_actors (tv_show_id, actor_id) \
             VALUES ($1, $2)",
        )
        .bind(credit.tv_show_id)
        .bind(credit.actor_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
