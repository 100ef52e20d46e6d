mod support;

use serde_json::Value;

use support::{empty_catalog, empty_server, server_for, test_config};

#[tokio::test]
async fn root_greets() {
    let server = empty_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("vidvault"));
}

#[tokio::test]
async fn ping_reports_version() {
    let server = empty_server();

    let body: Value = server.get("/ping").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_reports_in_memory_backend_and_catalog_settings() {
    let mut config = test_config();
    config.catalog.recent_days = 7;
    let server = server_for(empty_catalog(), config);

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["backend"], "in_memory");
    assert_eq!(body["checks"]["catalog"]["recent_days"], 7);
    assert_eq!(body["checks"]["catalog"]["page_size"], 2);
}

#[tokio::test]
async fn empty_catalog_lists_are_empty_not_errors() {
    let server = empty_server();

    let response = server.get("/api/v1/tv_shows").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tv_shows"], serde_json::json!([]));
    assert_eq!(
        response
            .headers()
            .get("max_pages")
            .and_then(|value| value.to_str().ok()),
        Some("0")
    );
}

#[tokio::test]
async fn dev_mode_cors_is_permissive() {
    let mut config = test_config();
    config.dev_mode = true;
    config.cors.allowed_origins = vec!["http://only.example".into()];
    let server = server_for(empty_catalog(), config);

    let response = server
        .get("/api/v1/genres")
        .add_header(
            axum::http::HeaderName::from_static("origin"),
            axum::http::HeaderValue::from_static("http://elsewhere.example"),
        )
        .await;
    response.assert_status_ok();
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
