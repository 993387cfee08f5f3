use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{documents, forward, ProxyError};
use crate::server::AppState;

/// `GET /orders`
pub(super) async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ProxyError> {
    forward(&state, documents::LIST_ORDERS, None).await
}
