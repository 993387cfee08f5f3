//! Error type returned by route handlers.
//!
//! [`ProxyError`] implements [`IntoResponse`], so handlers return
//! `Result<Json<Value>, ProxyError>` and let axum render the failure.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::clients::GraphqlError;

/// Failures surfaced to HTTP callers.
///
/// # Response mapping
///
/// | Variant | Status | Body |
/// |---|---|---|
/// | `Relay` | 500 | `{"error": "<message>"}` |
/// | `UpstreamRejected` | 422 | the mapped upstream body |
/// | `InvalidBody`, `InvalidForm` | rejection status | `{"error": "<message>"}` |
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The relay call failed: network, timeout, non-2xx or unreadable body.
    #[error(transparent)]
    Relay(#[from] GraphqlError),

    /// Strict mode only: the upstream answered with user errors or
    /// top-level GraphQL errors.
    #[error("Upstream rejected the operation")]
    UpstreamRejected(Value),

    /// The request body could not be read as a JSON object.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The request body could not be read as an urlencoded form.
    #[error("{}", .0.body_text())]
    InvalidForm(#[from] FormRejection),
}

impl ProxyError {
    /// Returns the HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidForm(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::UpstreamRejected(body) => (status, Json(body)).into_response(),
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
