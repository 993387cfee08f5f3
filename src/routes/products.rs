use std::sync::Arc;

use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{json, Map, Value};

use super::gid::{global_id, PRODUCT};
use super::{documents, forward, ProxyError};
use crate::server::AppState;

type Body = Map<String, Value>;

/// A product body sent as JSON or as an urlencoded form.
///
/// A request without a content type reads as `{}`. Any other content type is
/// handed to [`Json`], which rejects it with 415.
pub(super) struct ProductBody(Body);

#[axum::async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = ProxyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = match req.headers().get(CONTENT_TYPE) {
            None => return Ok(Self(Body::new())),
            Some(value) => value
                .to_str()
                .is_ok_and(|value| value.starts_with("application/x-www-form-urlencoded")),
        };

        if is_form {
            let Form(body) = Form::<Body>::from_request(req, state).await?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<Body>::from_request(req, state).await?;
            Ok(Self(body))
        }
    }
}

/// `GET /products`
pub(super) async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ProxyError> {
    forward(&state, documents::LIST_PRODUCTS, None).await
}

/// `GET /products/:id`
pub(super) async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ProxyError> {
    let variables = json!({ "id": global_id(PRODUCT, &id) });
    forward(&state, documents::GET_PRODUCT, Some(variables)).await
}

/// `POST /products`
pub(super) async fn create_product(
    State(state): State<Arc<AppState>>,
    ProductBody(body): ProductBody,
) -> Result<Json<Value>, ProxyError> {
    let input = create_input(&body);
    forward(&state, documents::CREATE_PRODUCT, Some(json!({ "input": input }))).await
}

/// `PUT /products/:id`
pub(super) async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ProductBody(body): ProductBody,
) -> Result<Json<Value>, ProxyError> {
    let input = update_input(&id, &body);
    forward(&state, documents::UPDATE_PRODUCT, Some(json!({ "input": input }))).await
}

/// `DELETE /products/:id`
pub(super) async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ProxyError> {
    let variables = json!({ "input": { "id": global_id(PRODUCT, &id) } });
    forward(&state, documents::DELETE_PRODUCT, Some(variables)).await
}

/// Copies `from` into `to` when the caller sent it. Absent fields stay
/// absent; an explicit `null` is forwarded as `null`.
fn copy_field(body: &Body, from: &str, input: &mut Body, to: &str) {
    if let Some(value) = body.get(from) {
        input.insert(to.to_string(), value.clone());
    }
}

/// `ProductInput` for `productCreate`.
///
/// `description` becomes `descriptionHtml` and `price` seeds a single variant.
fn create_input(body: &Body) -> Value {
    let mut input = Body::new();
    copy_field(body, "title", &mut input, "title");
    copy_field(body, "description", &mut input, "descriptionHtml");
    copy_field(body, "productType", &mut input, "productType");

    let mut variant = Body::new();
    copy_field(body, "price", &mut variant, "price");
    input.insert("variants".to_string(), json!([variant]));

    Value::Object(input)
}

/// `ProductInput` for `productUpdate`. Only title and description are updatable.
fn update_input(id: &str, body: &Body) -> Value {
    let mut input = Body::new();
    input.insert("id".to_string(), Value::String(global_id(PRODUCT, id)));
    copy_field(body, "title", &mut input, "title");
    copy_field(body, "description", &mut input, "descriptionHtml");

    Value::Object(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(value: Value) -> Body {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_create_input_renames_and_nests_fields() {
        let input = create_input(&body(json!({
            "title": "T-Shirt",
            "description": "<p>Soft</p>",
            "price": "19.99",
            "productType": "Apparel"
        })));

        assert_eq!(
            input,
            json!({
                "title": "T-Shirt",
                "descriptionHtml": "<p>Soft</p>",
                "productType": "Apparel",
                "variants": [{"price": "19.99"}]
            })
        );
    }

    #[test]
    fn test_create_input_omits_missing_fields() {
        let input = create_input(&body(json!({"title": "Only a title"})));
        assert_eq!(input, json!({"title": "Only a title", "variants": [{}]}));
    }

    #[test]
    fn test_create_input_keeps_explicit_null_and_ignores_unknown() {
        let input = create_input(&body(json!({"title": null, "vendor": "ACME"})));
        assert_eq!(input, json!({"title": null, "variants": [{}]}));
    }

    #[test]
    fn test_update_input_uses_global_id_and_ignores_price() {
        let input = update_input(
            "42",
            &body(json!({"title": "New", "description": "Desc", "price": "5.00"})),
        );

        assert_eq!(
            input,
            json!({
                "id": "gid://shopify/Product/42",
                "title": "New",
                "descriptionHtml": "Desc"
            })
        );
    }

    #[test]
    fn test_update_input_with_empty_body() {
        assert_eq!(
            update_input("7", &Body::new()),
            json!({"id": "gid://shopify/Product/7"})
        );
    }
}
