//! Request-level tests driving the full router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};

mod horse;

const TEST_SECRET: &str = "request-test-secret";

async fn setup() -> (TestContext, Router, TokenService) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let tokens = TokenService::new(TEST_SECRET, 60);
    let app = router().with_state(AppState::new(
        test.db.clone().unwrap(),
        tokens.clone(),
    ));

    (test, app, tokens)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Tests the service banner.
///
/// Expected: 200 with the docs url
#[tokio::test]
async fn root_returns_banner() {
    let (_test, app, _tokens) = setup().await;

    let (status, body) = send(&app, get_request("/", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs_url"], "/docs");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the horse list path documented
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app, _tokens) = setup().await;

    let (status, body) = send(&app, get_request("/api/v1/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/horses"].is_object());
}
