//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use shopify_proxy::{
    build_app, AccessToken, AppState, HostUrl, ProxyConfig, ProxyConfigBuilder, ShopDomain,
};
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "shpat_test_token";

/// A config builder pointed at `upstream` (usually a wiremock server URI).
pub fn config_for(upstream: &str) -> ProxyConfigBuilder {
    ProxyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new(TEST_TOKEN).unwrap())
        .api_host(HostUrl::new(upstream).unwrap())
        .request_timeout(Duration::from_secs(5))
}

/// Builds the full application for `config`.
pub fn app_for(config: ProxyConfig) -> Router {
    build_app(Arc::new(AppState::new(config).unwrap()))
}

/// Sends one request through the app and returns the status and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Sends one request and parses the body as JSON.
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    with_body(method, uri, "application/json", body.to_string())
}

pub fn with_body(
    method: &str,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap()
}
