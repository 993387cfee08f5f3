//! Configuration types for the proxy.
//!
//! The proxy is configured once at startup and the resulting [`ProxyConfig`]
//! is immutable afterwards. It is shared by reference (behind an `Arc`) with
//! the GraphQL relay and the HTTP handlers.
//!
//! # Overview
//!
//! - [`ProxyConfig`]: The immutable configuration
//! - [`ProxyConfigBuilder`]: A builder for constructing [`ProxyConfig`] instances
//! - [`AccessToken`]: A validated Admin API token with masked debug output
//! - [`ShopDomain`]: The normalized shop host every upstream call goes to
//! - [`HostUrl`]: An optional upstream origin override
//! - [`ApiVersion`]: The Admin API version in the endpoint path
//!
//! # Example
//!
//! ```rust
//! use shopify_proxy::{AccessToken, ProxyConfig, ShopDomain};
//!
//! let config = ProxyConfig::builder()
//!     .shop(ShopDomain::new("https://my-store.myshopify.com/").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .port(8080)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```
//!
//! # Environment
//!
//! The binary reads its settings with [`ProxyArgs`], from flags or from the
//! matching environment variables. Only `SHOPIFY_SHOP` and
//! `SHOPIFY_ACCESS_TOKEN` are required.

mod cli;
mod newtypes;
mod version;

pub use cli::ProxyArgs;
pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default timeout for a whole outbound GraphQL call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing the upstream connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable proxy configuration.
///
/// # Thread Safety
///
/// `ProxyConfig` is `Clone`, `Send`, and `Sync`.
///
/// The access token is only reachable through [`ProxyConfig::access_token`];
/// the `Debug` output masks it.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    port: u16,
    request_timeout: Duration,
    connect_timeout: Duration,
    public_dir: Option<PathBuf>,
    strict_user_errors: bool,
    user_agent_prefix: Option<String>,
}

impl ProxyConfig {
    /// Creates a new builder for constructing a `ProxyConfig`.
    #[must_use]
    pub fn builder() -> ProxyConfigBuilder {
        ProxyConfigBuilder::new()
    }

    /// Returns the normalized shop host.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the Admin API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the upstream origin override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the listening port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout applied to each outbound GraphQL call.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the timeout for establishing the upstream connection.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the static asset directory, if configured.
    #[must_use]
    pub fn public_dir(&self) -> Option<&Path> {
        self.public_dir.as_deref()
    }

    /// Returns whether upstream `userErrors`/`errors` map to 422 instead of 200.
    #[must_use]
    pub const fn strict_user_errors(&self) -> bool {
        self.strict_user_errors
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ProxyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProxyConfig>();
};

/// Builder for constructing [`ProxyConfig`] instances.
///
/// Required fields are `shop` and `access_token`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::default`] (`2023-07`)
/// - `api_host`: `None`
/// - `port`: [`DEFAULT_PORT`]
/// - `request_timeout`: [`DEFAULT_REQUEST_TIMEOUT`]
/// - `connect_timeout`: [`DEFAULT_CONNECT_TIMEOUT`]
/// - `public_dir`: `None`
/// - `strict_user_errors`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ProxyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    port: Option<u16>,
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    public_dir: Option<PathBuf>,
    strict_user_errors: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl ProxyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop host (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends upstream calls to this origin instead of the shop host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the listening port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the outbound request timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the outbound connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Serves static files from this directory for unmatched paths.
    #[must_use]
    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Maps upstream `userErrors`/`errors` to 422 instead of 200.
    #[must_use]
    pub const fn strict_user_errors(mut self, strict: bool) -> Self {
        self.strict_user_errors = Some(strict);
        self
    }

    /// Sets the user agent prefix for outbound requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ProxyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` are not set, and [`ConfigError::InvalidTimeout`] for a
    /// zero timeout.
    pub fn build(self) -> Result<ProxyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                name: "request_timeout",
                value: "0".to_string(),
            });
        }
        if connect_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                name: "connect_timeout",
                value: "0".to_string(),
            });
        }

        Ok(ProxyConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            port: self.port.unwrap_or(DEFAULT_PORT),
            request_timeout,
            connect_timeout,
            public_dir: self.public_dir,
            strict_user_errors: self.strict_user_errors.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
