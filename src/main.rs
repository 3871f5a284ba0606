//! Status server entry point.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cicd_status_server::config::Config;
use cicd_status_server::metrics;
use cicd_status_server::server::Server;

/// Minimal JSON status server.
///
/// Configured through the `ENV` and `PORT` environment variables.
#[derive(Parser, Debug)]
#[command(name = "cicd-status-server")]
#[command(about = "Minimal JSON status server for CI/CD pipelines")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("cicd_status_server=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Environment: {}", config.env);
    info!("Port: {}", config.port);

    Server::new(config).run().await?;

    Ok(())
}
