use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use vidvault_model::{Movie, MovieInfo, NewMovie};

use crate::handlers::envelope::{PageQuery, Paginated};
use crate::handlers::filters::{MediaQuery, SearchQuery};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

const KEY: &str = "movies";

/// Lists every movie, or resolves one `title|service|genre|year|actor`
/// criterion.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(query): Query<MediaQuery>,
) -> AppResult<Paginated<Movie>> {
    let page = query.page_number()?;
    let movies = match query.filter()? {
        Some(filter) => state.catalog.resolve_movies(&filter).await?,
        None => state.catalog.all_movies().await?,
    };

    Ok(Paginated::new(&state, KEY, movies, page))
}

pub async fn search_movies_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Paginated<Movie>> {
    let page = query.page_number()?;
    let movies = state.catalog.search_movies(query.term()).await?;
    Ok(Paginated::new(&state, KEY, movies, page))
}

pub async fn recent_movies_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Paginated<Movie>> {
    let page = query.page_number()?;
    let movies = state
        .catalog
        .recently_added_movies(state.recent_days())
        .await?;
    Ok(Paginated::new(&state, KEY, movies, page))
}

pub async fn movie_info_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<MovieInfo>> {
    state
        .catalog
        .movie_info(&title)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no movie titled `{title}`")))
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    Json(request): Json<NewMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.catalog.add_movie(request).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}
