//! Command-line and environment settings for the proxy binary.
//!
//! Every setting can be given as a flag or through the environment variable
//! shown in `--help`. Values from a `.env` file are visible here as long as
//! it is loaded before [`ProxyArgs::parse`](clap::Parser::parse) runs.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use super::{
    AccessToken, ApiVersion, HostUrl, ProxyConfig, ShopDomain, DEFAULT_CONNECT_TIMEOUT,
    DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT,
};
use crate::error::ConfigError;

/// Startup settings, read from flags or the environment.
///
/// # Example
///
/// ```rust
/// use clap::Parser;
/// use shopify_proxy::{ProxyArgs, ProxyConfig};
///
/// let args = ProxyArgs::try_parse_from([
///     "shopify-proxy",
///     "--shop",
///     "my-store",
///     "--access-token",
///     "shpat_123",
///     "--port",
///     "8080",
/// ])
/// .unwrap();
///
/// let config = ProxyConfig::try_from(args).unwrap();
/// assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
/// assert_eq!(config.port(), 8080);
/// ```
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shopify-proxy",
    version,
    about = "REST-style routes forwarded to the Shopify Admin GraphQL API"
)]
pub struct ProxyArgs {
    /// Shop name, host or URL, e.g. `my-store` or `https://my-store.myshopify.com/`.
    #[arg(long, env = "SHOPIFY_SHOP")]
    pub shop: ShopDomain,

    /// Admin API access token attached to every upstream call.
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: AccessToken,

    /// Admin API version used in the endpoint path.
    #[arg(long, env = "SHOPIFY_API_VERSION", default_value_t = ApiVersion::default())]
    pub api_version: ApiVersion,

    /// Send upstream calls to this origin instead of the shop host.
    #[arg(long, env = "SHOPIFY_API_HOST")]
    pub api_host: Option<HostUrl>,

    /// Listening port.
    #[arg(
        long,
        env = "PORT",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Timeout for a whole upstream call, in seconds.
    #[arg(
        long,
        env = "PROXY_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Timeout for establishing the upstream connection, in seconds.
    #[arg(
        long,
        env = "PROXY_CONNECT_TIMEOUT_SECS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_secs: u64,

    /// Serve static files from this directory for unmatched paths.
    #[arg(long, env = "PROXY_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Answer 422 when the upstream payload carries `userErrors` or `errors`.
    #[arg(
        long,
        env = "PROXY_STRICT_USER_ERRORS",
        action = ArgAction::Set,
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub strict_user_errors: bool,

    /// Prefix prepended to the outbound `User-Agent`.
    #[arg(long, env = "PROXY_USER_AGENT_PREFIX")]
    pub user_agent_prefix: Option<String>,
}

impl TryFrom<ProxyArgs> for ProxyConfig {
    type Error = ConfigError;

    fn try_from(args: ProxyArgs) -> Result<Self, Self::Error> {
        let mut builder = Self::builder()
            .shop(args.shop)
            .access_token(args.access_token)
            .api_version(args.api_version)
            .port(args.port)
            .request_timeout(Duration::from_secs(args.timeout_secs))
            .connect_timeout(Duration::from_secs(args.connect_timeout_secs))
            .strict_user_errors(args.strict_user_errors);

        if let Some(host) = args.api_host {
            builder = builder.api_host(host);
        }
        if let Some(dir) = args.public_dir {
            builder = builder.public_dir(dir);
        }
        if let Some(prefix) = args.user_agent_prefix {
            builder = builder.user_agent_prefix(prefix);
        }

        builder.build()
    }
}
