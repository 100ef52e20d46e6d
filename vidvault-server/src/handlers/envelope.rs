//! Paginated collection responses.
//!
//! Every collection endpoint answers with `{"<key>": [...]}` holding one
//! page, and reports its position through the `current_page` and
//! `max_pages` headers.

use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vidvault_core::Page;
use vidvault_core::api::routes::headers;
use vidvault_core::query::{normalize_page, paginate};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// The `page` query parameter shared by every collection endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_number(&self) -> AppResult<usize> {
        parse_page(self.page.as_deref())
    }
}

/// Missing pages default to 1; zero and negative pages clamp to 1.
pub fn parse_page(raw: Option<&str>) -> AppResult<usize> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value.parse::<i64>().map(normalize_page).map_err(|_| {
            AppError::bad_request(format!(
                "page must be an integer, got `{value}`"
            ))
        }),
    }
}

#[derive(Debug)]
pub struct Paginated<T> {
    key: &'static str,
    page: Page<T>,
}

impl<T: Serialize> Paginated<T> {
    /// Slices `items` with the configured page size.
    pub fn new(
        state: &AppState,
        key: &'static str,
        items: Vec<T>,
        page: usize,
    ) -> Self {
        Self {
            key,
            page: paginate(items, page, state.page_size()),
        }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        let mut header_map = HeaderMap::new();
        header_map.insert(
            HeaderName::from_static(headers::CURRENT_PAGE),
            HeaderValue::from(self.page.current_page),
        );
        header_map.insert(
            HeaderName::from_static(headers::MAX_PAGES),
            HeaderValue::from(self.page.max_pages),
        );

        let items = match serde_json::to_value(&self.page.items) {
            Ok(items) => items,
            Err(err) => {
                return AppError::internal(format!(
                    "failed to encode {}: {err}",
                    self.key
                ))
                .into_response();
            }
        };
        let mut body = Map::new();
        body.insert(self.key.to_string(), items);

        (header_map, Json(Value::Object(body))).into_response()
    }
}
