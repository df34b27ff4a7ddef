//! Integration tests for the skeletonify REST API.

use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};
use skeletonify_core::config::PartialConfig;
use skeletonify_server::{build_router, AppState, ServerConfig};

fn test_server(defaults: PartialConfig) -> TestServer {
    let config = ServerConfig {
        defaults,
        ..Default::default()
    };
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let server = test_server(PartialConfig::default());
    let res = server.get("/health").await;
    res.assert_status_ok();
    res.assert_text("ok");
}

#[tokio::test]
async fn config_reflects_server_defaults() {
    let server = test_server(PartialConfig {
        class_name: Some("brand".to_string()),
        ..Default::default()
    });
    let res = server.get("/api/config").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["className"], "brand");
    assert_eq!(body["animation"], "animation-1");
}

#[tokio::test]
async fn skeletonize_wraps_leaves() {
    let server = test_server(PartialConfig::default());
    let res = server
        .post("/api/skeletonize")
        .json(&json!({ "html": "<div><p>Hi</p><skeleton-keep><button>Stop</button></skeleton-keep></div>" }))
        .await;
    res.assert_status_ok();
    let body: Value = res.json();
    let html = body["html"].as_str().unwrap();
    assert!(html.starts_with("<div><div class=\"skeletonify skeletonify-animation-1\""));
    assert!(html.ends_with("<button>Stop</button></div>"));
}

#[tokio::test]
async fn request_overrides_win_over_server_defaults() {
    let server = test_server(PartialConfig {
        class_name: Some("brand".to_string()),
        ..Default::default()
    });
    let res = server
        .post("/api/skeletonize")
        .json(&json!({
            "html": "<button>Go</button>",
            "config": { "className": "request", "exceptTags": [] }
        }))
        .await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert!(body["html"].as_str().unwrap().contains("skeletonify-animation-1 request\""));
}

#[tokio::test]
async fn not_loading_returns_input() {
    let server = test_server(PartialConfig::default());
    let res = server
        .post("/api/skeletonize")
        .json(&json!({ "html": "<p>Done</p>", "loading": false }))
        .await;
    res.assert_status_ok();
    res.assert_json(&json!({ "html": "<p>Done</p>" }));
}

#[tokio::test]
async fn invalid_speed_returns_400() {
    let server = test_server(PartialConfig::default());
    let res = server
        .post("/api/skeletonize")
        .json(&json!({ "html": "<p>x</p>", "config": { "animationSpeed": -1 } }))
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_html_returns_422() {
    let server = test_server(PartialConfig::default());
    let res = server.post("/api/skeletonize").json(&json!({})).await;
    res.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn invalid_port_env_falls_back_to_default() {
    std::env::remove_var("SKELETONIFY_CONFIG");

    std::env::set_var("SKELETONIFY_PORT", "not-a-port");
    assert_eq!(ServerConfig::from_env().unwrap().port, 3848);

    std::env::set_var("SKELETONIFY_PORT", "4100");
    assert_eq!(ServerConfig::from_env().unwrap().port, 4100);

    std::env::remove_var("SKELETONIFY_PORT");
}
