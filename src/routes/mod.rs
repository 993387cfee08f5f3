//! HTTP routes exposed by the proxy.
//!
//! Every route follows the same shape: bind path and body values into
//! GraphQL variables, send one fixed document through the relay, and map the
//! upstream payload to the HTTP response.
//!
//! # Route table
//!
//! | Method | Path | Document |
//! |---|---|---|
//! | GET | `/products` | [`documents::LIST_PRODUCTS`] |
//! | GET | `/products/:id` | [`documents::GET_PRODUCT`] |
//! | POST | `/products` | [`documents::CREATE_PRODUCT`] |
//! | PUT | `/products/:id` | [`documents::UPDATE_PRODUCT`] |
//! | DELETE | `/products/:id` | [`documents::DELETE_PRODUCT`] |
//! | GET | `/orders` | [`documents::LIST_ORDERS`] |
//! | GET | `/health` | none |
//!
//! # Response mapping
//!
//! A successful relay call answers 200 with the upstream `data` member. When
//! the upstream also sent a top-level `errors` member the body is
//! `{"data": ..., "errors": ...}` so partial failures stay visible. A failed
//! relay call answers 500 with `{"error": "<message>"}`.
//!
//! With strict mode enabled, a payload carrying top-level errors or a
//! non-empty `userErrors` list answers 422 with the same body instead.

pub mod documents;
mod errors;
pub mod gid;
mod orders;
mod products;

pub use errors::ProxyError;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::server::AppState;

/// Builds the router holding every proxy route.
///
/// The returned router still needs its [`AppState`].
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/orders", get(orders::list_orders))
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Sends `document` through the relay and maps the payload.
pub(crate) async fn forward(
    state: &AppState,
    document: &'static str,
    variables: Option<Value>,
) -> Result<Json<Value>, ProxyError> {
    let payload = state.relay().query(document, variables).await?;
    map_payload(payload, state.config().strict_user_errors()).map(Json)
}

/// Maps an upstream GraphQL payload to the body returned to the caller.
///
/// # Errors
///
/// Returns [`ProxyError::UpstreamRejected`] only when `strict` is set and
/// the payload carries top-level errors or user errors.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::routes::map_payload;
/// use serde_json::json;
///
/// let body = map_payload(json!({"data": {"products": {"edges": []}}}), false).unwrap();
/// assert_eq!(body, json!({"products": {"edges": []}}));
///
/// let body = map_payload(json!({"data": null, "errors": [{"message": "x"}]}), false).unwrap();
/// assert_eq!(body, json!({"data": null, "errors": [{"message": "x"}]}));
/// ```
pub fn map_payload(payload: Value, strict: bool) -> Result<Value, ProxyError> {
    let Value::Object(mut envelope) = payload else {
        return Ok(Value::Null);
    };

    let data = envelope.remove("data").unwrap_or(Value::Null);
    let errors = envelope.remove("errors");
    let rejected =
        errors.as_ref().is_some_and(|errors| !is_empty(errors)) || has_user_errors(&data);

    let body = match errors {
        Some(errors) => json!({ "data": data, "errors": errors }),
        None => data,
    };

    if strict && rejected {
        return Err(ProxyError::UpstreamRejected(body));
    }

    Ok(body)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// True when any mutation payload directly under `data` has a non-empty
/// `userErrors` list.
fn has_user_errors(data: &Value) -> bool {
    data.as_object().is_some_and(|fields| {
        fields
            .values()
            .filter_map(|field| field.get("userErrors"))
            .any(|errors| !is_empty(errors))
    })
}
