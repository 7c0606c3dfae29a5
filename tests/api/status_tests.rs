//! Status and routing tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn status_reports_ok() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "status": "OK" }));
}

#[tokio::test]
async fn unknown_route_returns_json_envelope() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn logout_is_stateless() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/v1/logout", "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "logout": true }));
}
