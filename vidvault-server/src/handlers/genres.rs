use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use vidvault_model::{Genre, NewGenre};

use crate::handlers::envelope::{PageQuery, Paginated};
use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn list_genres_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Paginated<Genre>> {
    let page = query.page_number()?;
    let genres = state.catalog.all_genres().await?;
    Ok(Paginated::new(&state, "genres", genres, page))
}

/// Genre names are unique; a duplicate is rejected as invalid input.
pub async fn create_genre_handler(
    State(state): State<AppState>,
    Json(request): Json<NewGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = state.catalog.add_genre(request).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}
