//! HTTP-specific error types for upstream calls.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the Admin API
//! - [`InvalidResponseBodyError`]: A 2xx response whose body is not JSON
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! None of these carry the access token. Network errors have the request
//! URL stripped before they are wrapped.

use std::time::Duration;

use thiserror::Error;

/// Error returned when the upstream answers with a non-successful status.
///
/// The message field contains a JSON object with whichever of `errors`,
/// `error`, `error_description` the upstream sent, plus an `error_reference`
/// built from the `X-Request-Id` header when present.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP error! Status: {code}. {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a successful response does not carry a JSON body.
#[derive(Debug, Error)]
#[error("Upstream returned an invalid JSON body (status {code}): {reason}")]
pub struct InvalidResponseBodyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Why the body could not be used.
    pub reason: String,
}

/// Unified error type for all upstream transport failures.
///
/// # Example
///
/// ```rust,ignore
/// match http_client.post_json("graphql.json", &body).await {
///     Ok(response) => { /* 2xx with a JSON body */ }
///     Err(HttpError::Response(e)) => { /* non-2xx */ }
///     Err(HttpError::InvalidBody(e)) => { /* 2xx without JSON */ }
///     Err(HttpError::Timeout { .. }) => { /* upstream too slow */ }
///     Err(HttpError::Network(e)) => { /* DNS, TLS, connection */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be parsed as JSON.
    #[error(transparent)]
    InvalidBody(#[from] InvalidResponseBodyError),

    /// The upstream did not answer within the configured timeout.
    #[error("Upstream request timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_code_and_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_invalid_body_error_message() {
        let error = InvalidResponseBodyError {
            code: 200,
            reason: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("invalid JSON body"));
        assert!(message.contains("200"));
    }

    #[test]
    fn test_timeout_error_message() {
        let error = HttpError::Timeout {
            timeout: Duration::from_secs(30),
        };
        assert_eq!(error.to_string(), "Upstream request timed out after 30s");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _: &dyn std::error::Error = &InvalidResponseBodyError {
            code: 200,
            reason: "test".to_string(),
        };
    }
}
