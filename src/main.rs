//! Login portal dev server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 DEV SERVER                    │
//!   Browser request      │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ─────────────────────┼─▶│  http   │───▶│ routing │───▶│ upstream │──┼──▶ https://<origin>
//!   /api/...             │  │ server  │    │  rules  │    │  client  │  │
//!                        │  └─────────┘    └─────────┘    └────┬─────┘  │
//!                        │       ▲                             │        │
//!   Response             │       └──── response passthrough ◀──┘        │
//!   ◀────────────────────┼──────────────────────────────────────────────│
//!                        │  ┌──────────────────────────────────────────┐│
//!                        │  │ hooks: on_request / on_response / on_error││
//!                        │  └──────────────────────────────────────────┘│
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use login_portal::config::load_or_default;
use login_portal::http::HttpServer;
use login_portal::lifecycle::{signals, Shutdown};
use login_portal::observability::logging;

#[derive(Parser)]
#[command(name = "login-portal")]
#[command(about = "Development server for the login portal", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address from the config.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    logging::init(&config.observability)?;

    tracing::info!("login-portal v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        rules = config.rules.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
