//! GraphQL relay error types.
//!
//! Only transport-level failures are errors here. GraphQL-level errors (a
//! top-level `errors` array, mutation `userErrors`) arrive with HTTP 200 and
//! are returned as part of the payload, untouched.

use crate::clients::HttpError;
use thiserror::Error;

/// Error returned when a GraphQL request is rejected before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidGraphqlRequestError {
    /// The query document is empty.
    #[error("GraphQL query cannot be empty.")]
    EmptyQuery,

    /// Variables were given but are not a JSON object.
    #[error("GraphQL variables must be a JSON object, got {kind}.")]
    VariablesNotObject {
        /// The JSON type that was provided.
        kind: &'static str,
    },
}

/// Error type for relayed GraphQL calls.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::clients::graphql::GraphqlError;
/// use shopify_proxy::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred (network, timeout, non-2xx, non-JSON body).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request was rejected before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidGraphqlRequestError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
