use vidvault_model::Actor;

use crate::database::like::{contains_pattern, prefix_pattern};
use crate::database::ports::filter::ActorColumn;
use crate::error::Result;
use crate::query::filters::{ActorFilter, non_blank};
use crate::query::service::CatalogService;

impl CatalogService {
    pub async fn all_actors(&self) -> Result<Vec<Actor>> {
        self.uow.actors.list_all().await
    }

    /// All actors in alphabetical order of full name.
    pub async fn actors_alphabetical(&self) -> Result<Vec<Actor>> {
        self.uow.actors.list_sorted_by_full_name().await
    }

    pub async fn resolve_actors(&self, filter: &ActorFilter) -> Result<Vec<Actor>> {
        let (column, pattern) = match filter {
            ActorFilter::FirstName(value) => {
                (ActorColumn::FirstName, non_blank(value).map(prefix_pattern))
            }
            ActorFilter::LastName(value) => {
                (ActorColumn::LastName, non_blank(value).map(prefix_pattern))
            }
            ActorFilter::FullName(value) => {
                (ActorColumn::FullName, non_blank(value).map(contains_pattern))
            }
        };
        match pattern {
            Some(pattern) => self.uow.actors.filter_like(column, &pattern).await,
            None => Ok(Vec::new()),
        }
    }
}
