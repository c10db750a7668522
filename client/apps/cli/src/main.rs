//! Portal CLI Entry Point
//!
//! Wires the session store and the portal collections to the REST backend.
//! Uses `anyhow` for command errors; library errors are surfaced through
//! `kernel::error::AppError`.

mod cli;
mod commands;

use clap::Parser;
use platform::ClientConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Portal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_cli=info,portal=info,auth=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = ClientConfig::new(api_url)?.with_state_path(config.state_path);
    }
    if let Some(state) = cli.state {
        config = config.with_state_path(state);
    }

    tracing::debug!(base_url = %config.base_url, state = %config.state_path.display(), "Configuration loaded");

    let portal = Portal::connect(config)?;
    portal.run(cli.command).await
}
