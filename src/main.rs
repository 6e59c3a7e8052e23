//! Random integer standard deviation service.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /random/mean?length=L&requests=R
//!        │
//!        ▼
//!   ┌──────────┐   ┌───────────┐   ┌────────────────┐        ┌──────────────┐
//!   │   http   │──▶│ aggregate │──▶│    upstream    │──GET──▶│ random.org   │
//!   │ handlers │   │ R calls,  │   │ client + parse │◀─text──│ /integers/   │
//!   └──────────┘   │ in order  │   └────────────────┘        └──────────────┘
//!        ▲         └─────┬─────┘
//!        │               ▼
//!        │         ┌───────────┐
//!        └─ JSON ──│   stats   │
//!                  └───────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use random_mean::config::{load_config, ServiceConfig};
use random_mean::observability::{logging, metrics};
use random_mean::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "random-mean")]
#[command(about = "Standard deviation of random integer batches", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("random-mean v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        config_file = ?args.config,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_ctrl_c());

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
