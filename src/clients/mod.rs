//! Upstream client types for the Shopify Admin API.
//!
//! This module provides the outbound side of the proxy: an HTTP client that
//! performs one authenticated JSON POST, and the GraphQL relay built on top
//! of it.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client (no retries, explicit timeouts)
//! - [`HttpResponse`]: A successful, JSON-decoded response
//! - [`HttpError`]: Transport failures (network, timeout, status, body)
//! - [`graphql::GraphqlClient`]: The GraphQL relay used by every route
//! - [`graphql::GraphqlError`]: Relay failures
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use shopify_proxy::{GraphqlClient, ProxyArgs, ProxyConfig};
//!
//! let config = ProxyConfig::try_from(ProxyArgs::parse())?;
//! let client = GraphqlClient::new(&config)?;
//! let payload = client.query("query { shop { name } }", None).await?;
//! println!("Shop: {}", payload["data"]["shop"]["name"]);
//! ```

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidResponseBodyError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, PROXY_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
