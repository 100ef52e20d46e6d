use async_trait::async_trait;
use sqlx::PgPool;
use vidvault_model::{Actor, ActorId, NewActor};

use crate::database::ports::actors::ActorRepository;
use crate::database::ports::filter::ActorColumn;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PostgresActorRepository {
    pool: PgPool,
}

impl PostgresActorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn select_where(
        &self,
        predicate: &str,
        value: &str,
    ) -> Result<Vec<Actor>> {
        let sql = format!(
            "SELECT id, full_name, first_name, last_name FROM actors \
             WHERE {predicate} ORDER BY id"
        );
        let actors = sqlx::query_as::<_, Actor>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        Ok(actors)
    }
}

#[async_trait]
impl ActorRepository for PostgresActorRepository {
    async fn list_all(&self) -> Result<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(
            "SELECT id, full_name, first_name, last_name FROM actors \
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(actors)
    }

    async fn list_sorted_by_full_name(&self) -> Result<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(
            r#"
            SELECT id, full_name, first_name, last_name
            FROM actors
            ORDER BY full_name COLLATE "C", id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(actors)
    }

    async fn get_by_id(&self, id: ActorId) -> Result<Option<Actor>> {
        let actor = sqlx::query_as::<_, Actor>(
            "SELECT id, full_name, first_name, last_name FROM actors \
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(actor)
    }

    async fn filter_exact(
        &self,
        column: ActorColumn,
        value: &str,
    ) -> Result<Vec<Actor>> {
        self.select_where(&format!("{} = $1", column.as_sql()), value)
            .await
    }

    async fn filter_like(
        &self,
        column: ActorColumn,
        pattern: &str,
    ) -> Result<Vec<Actor>> {
        self.select_where(&format!("{} ILIKE $1", column.as_sql()), pattern)
            .await
    }

    async fn insert(&self, actor: NewActor) -> Result<Actor> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actors (full_name, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, first_name, last_name
            "#,
        )
        .bind(actor.full_name)
        .bind(actor.first_name)
        .bind(actor.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(actor)
    }
}
