//! Endpoints spanning movies and shows together.

use axum::extract::{Query, State};
use tracing::debug;
use vidvault_model::CatalogItem;

use crate::handlers::envelope::{PageQuery, Paginated};
use crate::handlers::filters::SearchQuery;
use crate::infra::{app_state::AppState, errors::AppResult};

/// Movie hits first, then show hits, each deduplicated by id.
pub async fn search_all_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Paginated<CatalogItem>> {
    let page = query.page_number()?;
    let items = state.catalog.search_all(query.term()).await?;
    debug!(term = query.term(), hits = items.len(), "search-all");
    Ok(Paginated::new(&state, "all", items, page))
}

pub async fn recently_added_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Paginated<CatalogItem>> {
    let page = query.page_number()?;
    let items = state.catalog.recently_added(state.recent_days()).await?;
    Ok(Paginated::new(&state, "recently_added", items, page))
}
