//! GraphQL relay for the Shopify Admin API.
//!
//! This module provides the single choke point for all upstream calls. It is
//! built on top of [`HttpClient`](crate::clients::HttpClient) and owns
//! credential application, URL construction and error normalization.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: The relay, with a single `query()` method
//! - [`GraphqlRequest`]: The `{query, variables}` body sent upstream
//! - [`GraphqlError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use shopify_proxy::{GraphqlClient, ProxyArgs, ProxyConfig};
//! use serde_json::json;
//!
//! let config = ProxyConfig::try_from(ProxyArgs::parse())?;
//! let client = GraphqlClient::new(&config)?;
//!
//! let payload = client.query(
//!     "query GetProduct($id: ID!) { product(id: $id) { title } }",
//!     Some(json!({ "id": "gid://shopify/Product/123" })),
//! ).await?;
//!
//! // GraphQL errors are data, not failures
//! if let Some(errors) = payload.get("errors") {
//!     println!("GraphQL errors: {errors}");
//! }
//! ```
//!
//! # Response Structure
//!
//! The payload is the upstream JSON body, returned whole:
//!
//! - `data`: The query result data
//! - `errors`: Any GraphQL errors (still HTTP 200)
//! - `extensions`: Query cost information
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one outbound request.

mod client;
mod errors;

pub use client::{operation_name, GraphqlClient, GraphqlRequest};
pub use errors::{GraphqlError, InvalidGraphqlRequestError};
