//! Command-line interface for the minesweeper server.

use clap::Parser;

/// Minesweeper game server with an HTTP API.
#[derive(Parser, Debug)]
#[command(name = "minesweeper-server")]
#[command(about = "Server-side minesweeper engine over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}
