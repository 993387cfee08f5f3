//! Integration tests for the GraphQL relay against a mock Admin API.
//!
//! These tests verify the outbound request shape (URL, headers, body) and
//! how every kind of upstream failure is normalized.

mod common;

use std::time::Duration;

use common::{config_for, TEST_TOKEN};
use serde_json::json;
use shopify_proxy::clients::HttpError;
use shopify_proxy::{ApiVersion, GraphqlClient, GraphqlError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHOP_NAME_QUERY: &str = "query shopName { shop { name } }";

fn client_for(server: &MockServer) -> GraphqlClient {
    GraphqlClient::new(&config_for(&server.uri()).build().unwrap()).unwrap()
}

// ============================================================================
// Outbound request shape
// ============================================================================

#[tokio::test]
async fn test_relay_posts_query_and_variables_with_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2023-07/graphql.json"))
        .and(header("X-Shopify-Access-Token", TEST_TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "query": "query getProduct($id: ID!) { product(id: $id) { id } }",
            "variables": {"id": "gid://shopify/Product/1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"product": {"id": "gid://shopify/Product/1"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .query(
            "query getProduct($id: ID!) { product(id: $id) { id } }",
            Some(json!({"id": "gid://shopify/Product/1"})),
        )
        .await
        .unwrap();

    assert_eq!(payload, json!({"data": {"product": {"id": "gid://shopify/Product/1"}}}));
}

#[tokio::test]
async fn test_relay_sends_empty_variables_object_when_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"query": SHOP_NAME_QUERY, "variables": {}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"shop": {"name": "Test"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap();
    assert_eq!(payload["data"]["shop"]["name"], "Test");
}

#[tokio::test]
async fn test_relay_uses_configured_api_version() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri())
        .api_version(ApiVersion::V2024_10)
        .build()
        .unwrap();
    let client = GraphqlClient::new(&config).unwrap();

    assert!(client.query(SHOP_NAME_QUERY, None).await.is_ok());
}

#[tokio::test]
async fn test_relay_user_agent_carries_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let config = config_for(&server.uri())
        .user_agent_prefix("storefront-backend")
        .build()
        .unwrap();
    GraphqlClient::new(&config)
        .unwrap()
        .query(SHOP_NAME_QUERY, None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("storefront-backend | Shopify GraphQL Proxy v"));
}

// ============================================================================
// Payload passthrough
// ============================================================================

#[tokio::test]
async fn test_graphql_errors_are_returned_as_payload() {
    let server = MockServer::start().await;
    let body = json!({
        "data": null,
        "errors": [{"message": "Field 'foo' doesn't exist on type 'QueryRoot'"}]
    });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let payload = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap();
    assert_eq!(payload, body);
}

// ============================================================================
// Failure normalization
// ============================================================================

#[tokio::test]
async fn test_unauthorized_is_an_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"errors": "[API] Invalid API key or access token"}))
                .insert_header("X-Request-Id", "req-123"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap_err();

    match &error {
        GraphqlError::Http(HttpError::Response(response)) => {
            assert_eq!(response.code, 401);
            assert_eq!(response.error_reference.as_deref(), Some("req-123"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
    let message = error.to_string();
    assert!(message.starts_with("HTTP error! Status: 401"));
    assert!(!message.contains(TEST_TOKEN));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap_err();
    assert!(matches!(
        error,
        GraphqlError::Http(HttpError::Response(ref response)) if response.code == 503
    ));
}

#[tokio::test]
async fn test_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap_err();
    assert!(matches!(error, GraphqlError::Http(HttpError::InvalidBody(_))));
}

#[tokio::test]
async fn test_empty_success_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let error = client_for(&server).query(SHOP_NAME_QUERY, None).await.unwrap_err();
    match error {
        GraphqlError::Http(HttpError::InvalidBody(body)) => assert_eq!(body.reason, "empty body"),
        other => panic!("expected an invalid body error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server.uri())
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let error = GraphqlClient::new(&config)
        .unwrap()
        .query(SHOP_NAME_QUERY, None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Http(HttpError::Timeout { .. })));
    assert_eq!(error.to_string(), "Upstream request timed out after 1s");
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_network_error() {
    let config = config_for("http://127.0.0.1:1").build().unwrap();
    let error = GraphqlClient::new(&config)
        .unwrap()
        .query(SHOP_NAME_QUERY, None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Http(HttpError::Network(_))));
    assert!(!error.to_string().is_empty());
}
