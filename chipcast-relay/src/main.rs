//! chipcast relay
//!
//! Watches the chip treasury contract on every configured network and posts
//! a status update for each claimed chip.

mod config;
mod logging;
mod shutdown;

use chipcast_core::processors::{
    DryRunPublisher, NetworkPipeline, StatusPublisher, TwitterPublisher,
};
use chipcast_sdk::client::TwitterClient;
use clap::Parser;
use config::{ConfigLoader, get_twitter_credentials};
use logging::init_tracing;
use shutdown::spawn_shutdown_handler;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Timeout of every outgoing HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// chipcast - Claim announcements for the chip treasury
#[derive(Parser, Debug)]
#[command(name = "chipcast-relay")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "CHIPCAST_CONFIG", default_value = "./chipcast.toml")]
    config: PathBuf,

    /// Directory for combined.log and error.log
    #[arg(long, env = "CHIPCAST_LOG_DIR", default_value = ".")]
    log_dir: PathBuf,

    /// Compose and log status updates without posting them
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine, the variables may come from the environment
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(&args.log_dir)?;

    tracing::info!("Starting chipcast-relay v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let loaded_config = ConfigLoader::new(&args.config).load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!(
        networks = loaded_config.networks.len(),
        "Configuration loaded from {:?}",
        args.config
    );

    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    // One publisher shared by every network
    let publisher: Arc<dyn StatusPublisher> = if args.dry_run {
        tracing::warn!("Dry run enabled, status updates will not be posted");
        Arc::new(DryRunPublisher)
    } else {
        let credentials = get_twitter_credentials().map_err(|e| {
            tracing::error!("Failed to load X credentials: {}", e);
            e
        })?;
        let client = TwitterClient::new(credentials)?.with_http_client(http.clone());
        Arc::new(TwitterPublisher::new(client))
    };

    let shutdown_rx = spawn_shutdown_handler()?;

    let handles: Vec<_> = loaded_config
        .networks
        .iter()
        .map(|network| {
            NetworkPipeline::evm(network, &loaded_config.status, http.clone(), publisher.clone())
                .spawn(shutdown_rx.clone())
        })
        .collect();

    for handle in handles {
        handle.join().await;
    }

    tracing::info!("Relay shutdown complete");
    Ok(())
}
