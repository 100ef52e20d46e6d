use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use vidvault_model::{NewTvShow, TvShow, TvShowInfo};

use crate::handlers::envelope::{PageQuery, Paginated};
use crate::handlers::filters::{MediaQuery, SearchQuery};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

const KEY: &str = "tv_shows";

/// A `year` criterion matches every year a show was running.
pub async fn list_tv_shows_handler(
    State(state): State<AppState>,
    Query(query): Query<MediaQuery>,
) -> AppResult<Paginated<TvShow>> {
    let page = query.page_number()?;
    let shows = match query.filter()? {
        Some(filter) => state.catalog.resolve_tv_shows(&filter).await?,
        None => state.catalog.all_tv_shows().await?,
    };

    Ok(Paginated::new(&state, KEY, shows, page))
}

pub async fn search_tv_shows_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Paginated<TvShow>> {
    let page = query.page_number()?;
    let shows = state.catalog.search_tv_shows(query.term()).await?;
    Ok(Paginated::new(&state, KEY, shows, page))
}

pub async fn recent_tv_shows_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Paginated<TvShow>> {
    let page = query.page_number()?;
    let shows = state
        .catalog
        .recently_added_tv_shows(state.recent_days())
        .await?;
    Ok(Paginated::new(&state, KEY, shows, page))
}

/// The show with its genres, cast and season/episode tree.
pub async fn tv_show_info_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<TvShowInfo>> {
    state
        .catalog
        .tv_show_info(&title)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no show titled `{title}`")))
}

pub async fn create_tv_show_handler(
    State(state): State<AppState>,
    Json(request): Json<NewTvShow>,
) -> AppResult<(StatusCode, Json<TvShow>)> {
    let show = state.catalog.add_tv_show(request).await?;
    Ok((StatusCode::CREATED, Json(show)))
}
