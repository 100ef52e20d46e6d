use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use vidvault_core::api::routes::headers;

use crate::handlers::health::{health_handler, ping_handler, root_handler};
use crate::infra::{app_state::AppState, config::CorsConfig};
use crate::routes;

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();

    let cors_layer = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        build_cors_layer(&state.config.cors)
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .merge(versioned_api)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow-list CORS that still lets browsers read the pagination headers.
pub fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors.allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([
            HeaderName::from_static(headers::CURRENT_PAGE),
            HeaderName::from_static(headers::MAX_PAGES),
        ])
}
