//! Minesweeper game server binary.

use anyhow::Result;
use clap::Parser;
use minesweeper_server::{Cli, GameRegistry, router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = Arc::new(GameRegistry::new());
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "minesweeper server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
