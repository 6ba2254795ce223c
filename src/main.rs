//! itemctl server binary
//!
//! Creates the database pool, runs schema creation, and serves the item
//! catalog until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use itemctl::db::{create_pool, migrations};
use itemctl::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "itemctl",
    author,
    version,
    about = "Item catalog server - paginated CRUD over server-rendered pages"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Database URL (the file is created if missing)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:items.db")]
    database_url: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let pool = create_pool(&cli.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create schema")?;

    run_server(pool, ServerConfig { bind_addr: cli.bind })
        .await
        .context("Server error")?;

    Ok(())
}
