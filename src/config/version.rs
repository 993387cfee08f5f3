//! Admin API version definitions.
//!
//! This module provides the [`ApiVersion`] enum naming the versioned path
//! segment of the Admin GraphQL endpoint (`/admin/api/{version}/graphql.json`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify releases new API versions quarterly (January, April, July, October).
/// The proxy pins a version because every route owns a fixed GraphQL
/// document, and documents are only guaranteed to validate against the
/// version they were written for. Moving to a newer version is a deliberate
/// configuration change.
///
/// # Example
///
/// ```rust
/// use shopify_proxy::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(ApiVersion::default().to_string(), "2023-07");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-07 (July 2023), the version the bundled route
    /// documents were written against.
    #[default]
    V2023_07,
    /// API version 2023-10 (October 2023)
    V2023_10,
    /// API version 2024-01 (January 2024)
    V2024_01,
    /// API version 2024-04 (April 2024)
    V2024_04,
    /// API version 2024-07 (July 2024)
    V2024_07,
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the oldest version within Shopify's support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_01
    }

    /// Returns `true` if this version is past Shopify's support window.
    ///
    /// `Unstable` and `Custom` versions are never considered deprecated.
    /// Shopify keeps answering deprecated versions by falling forward to the
    /// oldest supported one, so this is a warning condition, not an error.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Unstable | Self::Custom(_) => false,
            _ => *self < Self::minimum_supported(),
        }
    }

    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2023_07 => 1,
            Self::V2023_10 => 2,
            Self::V2024_01 => 3,
            Self::V2024_04 => 4,
            Self::V2024_07 => 5,
            Self::V2024_10 => 6,
            Self::V2025_01 => 7,
            Self::V2025_04 => 8,
            Self::V2025_07 => 9,
            Self::V2025_10 => 10,
            Self::Unstable => 100,
            Self::Custom(_) => 101,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Shopify's quarterly releases
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2023_07 => "2023-07",
            Self::V2023_10 => "2023-10",
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2023-07" => Ok(Self::V2023_07),
            "2023-10" => Ok(Self::V2023_10),
            "2024-01" => Ok(Self::V2024_01),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
