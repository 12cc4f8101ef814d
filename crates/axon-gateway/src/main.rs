//! Axon Gateway binary - serves the game client actions over HTTP.

use anyhow::{Context, Result};
use axon_connect::repository::{GrpcAuthRepository, GrpcEconomyRepository};
use axon_connect::{ClientRegistry, ConnectConfig};
use axon_gateway::session::SessionKeys;
use axon_gateway::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Axon Gateway - HTTP front for the game backend services.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Bind address (default: all interfaces)
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Shared secret used to verify session tokens
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = if args.debug {
        "debug,axon_gateway=trace"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if args.jwt_secret.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }

    let config = ConnectConfig::from_env().context("Failed to load gRPC configuration")?;
    info!("Gateway targeting backend at {}", config.server_url);

    let registry =
        Arc::new(ClientRegistry::new(&config).context("Failed to build the client registry")?);

    let state = AppState {
        auth: Arc::new(GrpcAuthRepository::new(registry.clone())),
        economy: Arc::new(GrpcEconomyRepository::new(registry)),
        sessions: SessionKeys::new(&args.jwt_secret, config.use_tls),
    };

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("Failed to parse bind address")?;

    info!("Starting gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;

    axum::serve(listener, axon_gateway::router(state))
        .await
        .context("Gateway server failed")?;

    Ok(())
}
