use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use vidvault_model::{Actor, NewActor};

use crate::handlers::envelope::Paginated;
use crate::handlers::filters::ActorQuery;
use crate::infra::{app_state::AppState, errors::AppResult};

const KEY: &str = "actors";

#[derive(Debug, Deserialize)]
pub struct CreateActorRequest {
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateActorRequest {
    fn into_new_actor(self) -> NewActor {
        let derived = NewActor::from_full_name(self.full_name);
        NewActor {
            first_name: self.first_name.unwrap_or(derived.first_name),
            last_name: self.last_name.unwrap_or(derived.last_name),
            full_name: derived.full_name,
        }
    }
}

/// Without a criterion, actors are listed alphabetically by full name.
pub async fn list_actors_handler(
    State(state): State<AppState>,
    Query(query): Query<ActorQuery>,
) -> AppResult<Paginated<Actor>> {
    let page = query.page_number()?;
    let actors = match query.filter()? {
        Some(filter) => state.catalog.resolve_actors(&filter).await?,
        None => state.catalog.actors_alphabetical().await?,
    };

    Ok(Paginated::new(&state, KEY, actors, page))
}

pub async fn create_actor_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateActorRequest>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    let actor = state.catalog.add_actor(request.into_new_actor()).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}
