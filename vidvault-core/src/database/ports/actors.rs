use async_trait::async_trait;
use vidvault_model::{Actor, ActorId, NewActor};

use crate::database::ports::filter::ActorColumn;
use crate::error::Result;

#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// All actors ordered by id.
    async fn list_all(&self) -> Result<Vec<Actor>>;

    /// All actors ordered alphabetically by full name, ties broken by id.
    async fn list_sorted_by_full_name(&self) -> Result<Vec<Actor>>;

    async fn get_by_id(&self, id: ActorId) -> Result<Option<Actor>>;

    async fn filter_exact(
        &self,
        column: ActorColumn,
        value: &str,
    ) -> Result<Vec<Actor>>;

    async fn filter_like(
        &self,
        column: ActorColumn,
        pattern: &str,
    ) -> Result<Vec<Actor>>;

    async fn insert(&self, actor: NewActor) -> Result<Actor>;
}
