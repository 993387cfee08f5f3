//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type that performs the single
//! authenticated POST behind every relayed GraphQL call.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidResponseBodyError};
use crate::clients::http_response::HttpResponse;
use crate::config::ProxyConfig;

/// Crate version from Cargo.toml.
pub const PROXY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Base URI construction from the shop host or the `api_host` override
/// - Default headers including User-Agent, content type and access token
/// - Explicit request and connect timeouts
/// - Strict JSON decoding of successful responses
///
/// It never retries: every call to [`post_json`](Self::post_json) results in
/// exactly one outbound request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2023-07").
    base_path: String,
    default_headers: HashMap<String, String>,
    request_timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // default_headers holds the access token
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the configured shop.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2023-07")
    /// * `config` - The proxy configuration providing host, token and timeouts
    ///
    /// # Errors
    ///
    /// Returns the [`reqwest::Error`] raised if the underlying client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(base_path: impl Into<String>, config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let base_path = base_path.into();

        let base_uri = config.api_host().map_or_else(
            || format!("https://{}", config.shop()),
            |host| host.origin().to_string(),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify GraphQL Proxy v{PROXY_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            request_timeout: config.request_timeout(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the full URL for a path relative to the base path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs `body` serialized as JSON and returns the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The connection fails (`Network`)
    /// - The request exceeds the configured timeout (`Timeout`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response does not carry a JSON body (`InvalidBody`)
    pub async fn post_json<T>(&self, path: &str, body: &T) -> Result<HttpResponse, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url(path);

        let mut req_builder = self.client.post(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.json(body);

        let res = req_builder.send().await.map_err(|e| self.classify(e))?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(|e| self.classify(e))?;

        if !(200..=299).contains(&code) {
            // Error bodies are best effort; the status is what matters
            let body = serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if body_text.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::json!({ "raw_body": body_text })
                }
            });
            let response = HttpResponse::new(code, res_headers, body);
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::serialize_error(&response),
                error_reference: response.request_id().map(String::from),
            }));
        }

        let body = serde_json::from_str(&body_text).map_err(|e| InvalidResponseBodyError {
            code,
            reason: if body_text.trim().is_empty() {
                "empty body".to_string()
            } else {
                e.to_string()
            },
        })?;

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                self.base_path,
                reason
            );
        }

        Ok(response)
    }

    fn classify(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout {
                timeout: self.request_timeout,
            }
        } else {
            HttpError::Network(error.without_url())
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopDomain};
    use serde_json::json;

    fn create_test_config() -> ProxyConfig {
        ProxyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_shop_host() {
        let client = HttpClient::new("/admin/api/2023-07", &create_test_config()).unwrap();

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2023-07");
        assert_eq!(
            client.url("graphql.json"),
            "https://test-shop.myshopify.com/admin/api/2023-07/graphql.json"
        );
    }

    #[test]
    fn test_client_construction_uses_api_host_override() {
        let config = ProxyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9999/ignored").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2024-10", &config).unwrap();

        assert_eq!(
            client.url("graphql.json"),
            "http://127.0.0.1:9999/admin/api/2024-10/graphql.json"
        );
    }

    #[test]
    fn test_access_token_and_content_type_headers() {
        let client = HttpClient::new("/admin/api/2023-07", &create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new("/admin/api/2023-07", &create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Shopify GraphQL Proxy v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ProxyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("Storefront/2.0")
            .build()
            .unwrap();
        let client = HttpClient::new("/admin/api/2023-07", &config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Storefront/2.0 | "));
    }

    #[test]
    fn test_debug_output_hides_token() {
        let client = HttpClient::new("/admin/api/2023-07", &create_test_config()).unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("test-shop.myshopify.com"));
        assert!(!debug_str.contains("test-access-token"));
    }

    #[test]
    fn test_serialize_error_keeps_upstream_fields_and_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let response = HttpResponse::new(
            401,
            headers,
            json!({"errors": "[API] Invalid API key or access token", "ignored": true}),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["errors"], "[API] Invalid API key or access token");
        assert!(parsed["error_reference"].as_str().unwrap().contains("req-42"));
        assert!(parsed.get("ignored").is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
