//! Axon Tiles binary - serves map tiles from a directory.

use anyhow::{Context, Result};
use axon_tiles::FsStore;
use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Axon Tiles - map tile store with empty-tile fallback.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the tile objects
    #[arg(short, long)]
    root: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8788")]
    port: u16,

    /// Bind address (default: all interfaces)
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Origins allowed to read tiles cross-site (can be repeated)
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = if args.debug {
        "debug,axon_tiles=trace"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !args.root.exists() {
        warn!("Tile root {} does not exist yet", args.root.display());
    }

    let allowed_origins = args
        .allow_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("Failed to parse bind address")?;

    let store = Arc::new(FsStore::new(args.root));

    info!("Starting tile service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;

    axum::serve(listener, axon_tiles::router(store, allowed_origins))
        .await
        .context("Tile server failed")?;

    Ok(())
}
