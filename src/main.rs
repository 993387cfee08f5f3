use std::process::ExitCode;

use clap::Parser;
use shopify_proxy::{server, ProxyArgs, ProxyConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    // Missing or malformed settings make clap print usage and exit non-zero
    let args = ProxyArgs::parse();

    let config = match ProxyConfig::try_from(args) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration, refusing to start");
            return ExitCode::FAILURE;
        }
    };

    match server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "proxy failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
