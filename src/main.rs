use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chuckie_mcp::config::AppConfig;

#[derive(Parser)]
#[command(name = "chuckie-mcp")]
#[command(about = "Chuckie MCP Server - bearer-gated helper endpoints for agent scenarios")]
#[command(version)]
struct Args {
    #[arg(long, help = "Interface to bind (overrides MCP_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides MCP_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up API_KEY, MCP_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chuckie_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting Chuckie MCP in {:?} mode", config.environment);

    // Only report presence; the value never reaches the logs
    let key_var = &config.security.api_key_env;
    if std::env::var(key_var).map_or(true, |v| v.is_empty()) {
        tracing::warn!("{} is not set; protected routes will answer 503 until it is", key_var);
    }

    let app = chuckie_mcp::app(&config);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
