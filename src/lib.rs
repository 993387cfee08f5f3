//! # Shopify GraphQL Proxy
//!
//! A small HTTP service that exposes a fixed set of REST-style routes for
//! products and orders and forwards each one, as a single GraphQL operation,
//! to the Shopify Admin GraphQL API. Callers never see the shop's access
//! token; the proxy attaches it to every upstream call.
//!
//! ## Overview
//!
//! - Validated, immutable configuration via [`ProxyConfig`] and [`ProxyConfigBuilder`]
//! - A GraphQL relay, [`GraphqlClient`], through which every upstream call goes
//! - Fixed GraphQL documents and path-to-global-id binding in [`routes`]
//! - An axum application with CORS, request tracing and graceful shutdown in [`server`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_proxy::{AccessToken, ApiVersion, ProxyConfig, ShopDomain};
//!
//! let config = ProxyConfig::builder()
//!     .shop(ShopDomain::new("https://my-store.myshopify.com/").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2023_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.port(), 3000);
//! ```
//!
//! ## Running the proxy
//!
//! ```rust,ignore
//! use clap::Parser;
//! use shopify_proxy::{server, ProxyArgs, ProxyConfig};
//!
//! // Flags or SHOPIFY_SHOP, SHOPIFY_ACCESS_TOKEN, PORT, ...
//! let config = ProxyConfig::try_from(ProxyArgs::parse())?;
//! server::serve(config).await?;
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Upstream operation |
//! |---|---|---|
//! | GET | `/products` | `products(first: 10)` |
//! | GET | `/products/:id` | `product(id: gid://shopify/Product/:id)` |
//! | POST | `/products` | `productCreate` |
//! | PUT | `/products/:id` | `productUpdate` |
//! | DELETE | `/products/:id` | `productDelete` |
//! | GET | `/orders` | `orders(first: 10)` |
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly, never read from globals
//! - **Fail-fast validation**: newtypes validate on construction; startup stops on bad config
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: built on Tokio, axum and reqwest

pub mod clients;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, HostUrl, ProxyArgs, ProxyConfig, ProxyConfigBuilder, ShopDomain,
};
pub use error::ConfigError;

pub use clients::{
    GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse, HttpResponseError,
};
pub use routes::ProxyError;
pub use server::{build_app, AppState, ServerError};
