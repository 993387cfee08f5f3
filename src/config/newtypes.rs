//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A validated Admin API access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::AccessToken;
///
/// let token = AccessToken::new("shpat_secret").unwrap();
/// assert_eq!(token.as_ref(), "shpat_secret");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// Surrounding whitespace is trimmed, since tokens copied into `.env`
    /// files often pick up a trailing newline or space.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token.to_string()))
    }
}

impl FromStr for AccessToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated, normalized Shopify shop host.
///
/// Every upstream request is addressed to exactly this host, so the value is
/// normalized once at startup.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
/// - `https://shop-name.myshopify.com/` - scheme and trailing slash stripped
///
/// Normalization is idempotent: feeding the normalized host back into
/// [`ShopDomain::new`] yields the same value.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::ShopDomain;
///
/// let domain = ShopDomain::new("https://my-store.myshopify.com/").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
///
/// let again = ShopDomain::new(domain.as_ref()).unwrap();
/// assert_eq!(again, domain);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the value has an unknown
    /// scheme, carries a path, or is not a valid host name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = domain.into();
        let invalid = || ConfigError::InvalidShopDomain {
            domain: raw.clone(),
        };

        let lowered = raw.trim().to_lowercase();
        let without_scheme = match lowered.find("://") {
            Some(idx) => match &lowered[..idx] {
                "http" | "https" => &lowered[idx + 3..],
                _ => return Err(invalid()),
            },
            None => lowered.as_str(),
        };
        let host = without_scheme.trim_end_matches('/');

        if host.is_empty() {
            return Err(invalid());
        }

        let full_domain = if host.contains('.') {
            host.to_string()
        } else {
            format!("{host}{}", Self::SUFFIX)
        };

        if !Self::is_valid_host(&full_domain) {
            return Err(invalid());
        }

        Ok(Self(full_domain))
    }

    fn is_valid_host(host: &str) -> bool {
        host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
    }
}

impl FromStr for ShopDomain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated URL used to override the upstream origin.
///
/// When set, requests go to this origin instead of `https://{shop}`. This is
/// how the proxy is pointed at an egress proxy or a local mock upstream.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(url.origin(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Authority ends at path, query, fragment or end of string
        let remainder = &url[host_start..];
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        let host_end = url[host_start..authority_end]
            .find(':')
            .map_or(authority_end, |i| host_start + i);

        if host_start == host_end {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self { url, authority_end })
    }

    /// Returns scheme, host and port, without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl FromStr for HostUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
