//! GraphQL relay implementation for the Shopify Admin API.

use serde::Serialize;
use serde_json::Value;

use crate::clients::graphql::{GraphqlError, InvalidGraphqlRequestError};
use crate::clients::HttpClient;
use crate::config::{ApiVersion, ProxyConfig};

/// The body of an upstream GraphQL call: `{"query": ..., "variables": ...}`.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::clients::graphql::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query { shop { name } }", None).unwrap();
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({"query": "query { shop { name } }", "variables": {}})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// The variables object, `{}` when none were given.
    pub variables: Value,
}

impl<'a> GraphqlRequest<'a> {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGraphqlRequestError`] if the query is blank or the
    /// variables are not a JSON object.
    pub fn new(
        query: &'a str,
        variables: Option<Value>,
    ) -> Result<Self, InvalidGraphqlRequestError> {
        if query.trim().is_empty() {
            return Err(InvalidGraphqlRequestError::EmptyQuery);
        }

        let variables = match variables {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(object @ Value::Object(_)) => object,
            Some(other) => {
                return Err(InvalidGraphqlRequestError::VariablesNotObject {
                    kind: json_kind(&other),
                })
            }
        };

        Ok(Self { query, variables })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Returns the operation name declared by a GraphQL document, if any.
///
/// Used to label log entries; anonymous documents return `None`.
///
/// ```rust
/// use shopify_proxy::clients::graphql::operation_name;
///
/// assert_eq!(operation_name("query getProduct($id: ID!) { x }"), Some("getProduct"));
/// assert_eq!(operation_name("mutation createProduct { x }"), Some("createProduct"));
/// assert_eq!(operation_name("query { shop { name } }"), None);
/// assert_eq!(operation_name("{ shop { name } }"), None);
/// ```
#[must_use]
pub fn operation_name(document: &str) -> Option<&str> {
    let document = document.trim_start();
    let rest = ["query", "mutation", "subscription"]
        .iter()
        .find_map(|keyword| document.strip_prefix(keyword))?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());

    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// GraphQL relay for the Shopify Admin API.
///
/// Stateless and reentrant: concurrent calls share only the immutable HTTP
/// client and configuration, so different queries and variables never
/// interfere.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::{AccessToken, GraphqlClient, ProxyConfig, ShopDomain};
///
/// let config = ProxyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config).unwrap();
/// assert_eq!(
///     client.endpoint(),
///     "https://my-store.myshopify.com/admin/api/2023-07/graphql.json"
/// );
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    const GRAPHQL_PATH: &'static str = "graphql.json";

    /// Creates a new relay for the configured shop and API version.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new(config: &ProxyConfig) -> Result<Self, GraphqlError> {
        let api_version = config.api_version().clone();
        let base_path = format!("/admin/api/{api_version}");
        let http_client =
            HttpClient::new(base_path, config).map_err(GraphqlError::ClientBuild)?;

        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the full URL of the Admin GraphQL endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.http_client.url(Self::GRAPHQL_PATH)
    }

    /// Relays a GraphQL document and its variables to the Admin API.
    ///
    /// # Arguments
    ///
    /// * `query` - The GraphQL document
    /// * `variables` - Optional variables object (sent as `{}` when `None`)
    ///
    /// # Returns
    ///
    /// The upstream JSON body, whole. A top-level `errors` array is part of
    /// the payload, not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] for network errors, timeouts, non-2xx
    /// statuses, non-JSON bodies and requests rejected before sending.
    /// Every failure is logged with the operation name and cause.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let operation = operation_name(query).unwrap_or("anonymous");
        tracing::debug!(operation, "relaying GraphQL operation");

        match self.execute_query(query, variables).await {
            Ok(payload) => {
                if payload.get("errors").is_some() {
                    tracing::warn!(operation, "GraphQL response carries top-level errors");
                }
                Ok(payload)
            }
            Err(error) => {
                tracing::error!(operation, error = %error, "GraphQL relay call failed");
                Err(error)
            }
        }
    }

    async fn execute_query(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let request = GraphqlRequest::new(query, variables)?;
        let response = self
            .http_client
            .post_json(Self::GRAPHQL_PATH, &request)
            .await?;
        Ok(response.body)
    }
}
