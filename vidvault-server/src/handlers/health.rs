use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::infra::app_state::AppState;

pub async fn root_handler() -> &'static str {
    "vidvault catalog API. Browse /api/v1/movies, /api/v1/tv_shows or /api/v1/search?q="
}

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "vidvault catalog is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Reports store reachability; `503` when the database does not answer.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let mut is_unhealthy = false;

    match &state.postgres {
        Some(db) => match db.ping().await {
            Ok(()) => {
                let stats = db.pool_stats();
                health_status["checks"]["database"] = json!({
                    "status": "healthy",
                    "backend": "postgres",
                    "pool_size": stats.size,
                    "idle_connections": stats.idle,
                    "max_connections": stats.max_size
                });
            }
            Err(e) => {
                warn!(error = %e, "health check could not reach the database");
                health_status["checks"]["database"] = json!({
                    "status": "unhealthy",
                    "backend": "postgres",
                    "error": e.to_string()
                });
                is_unhealthy = true;
            }
        },
        None => {
            health_status["checks"]["database"] = json!({
                "status": "healthy",
                "backend": "in_memory"
            });
        }
    }

    health_status["checks"]["catalog"] = json!({
        "page_size": state.page_size().get(),
        "recent_days": state.recent_days()
    });

    if is_unhealthy {
        health_status["status"] = json!("unhealthy");
        (StatusCode::SERVICE_UNAVAILABLE, Json(health_status))
    } else {
        (StatusCode::OK, Json(health_status))
    }
}
