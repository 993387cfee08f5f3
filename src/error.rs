//! Error types for proxy configuration.
//!
//! This module contains the error type returned while building a
//! [`ProxyConfig`](crate::ProxyConfig). The same messages surface as clap
//! validation errors when a flag or environment variable is malformed.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad deployment fails at startup instead of on the first proxied request.
//! Error messages name the offending value (never the access token) and say
//! what was expected.
//!
//! # Example
//!
//! ```rust
//! use shopify_proxy::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the proxy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name', 'shop-name.myshopify.com' or 'https://shop-name.myshopify.com/'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Upstream host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A timeout setting is invalid.
    #[error("Invalid timeout '{value}' for {name}. Expected a positive number of seconds.")]
    InvalidTimeout {
        /// The setting the value was provided for.
        name: &'static str,
        /// The invalid value that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
