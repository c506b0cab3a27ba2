//! Pulseboard Server
//!
//! Run with: cargo run --bin pulseboard -- [--config PATH]
//!
//! # Configuration
//!
//! Without `--config` the first of these files is used, falling back to
//! built-in defaults:
//! - `$XDG_CONFIG_HOME/pulseboard/config.toml`
//! - `/etc/pulseboard/config.toml`
//! - `./config.toml`
//!
//! Environment variables override file values:
//! - `PULSEBOARD_HOST`, `PULSEBOARD_PORT`
//! - `PULSEBOARD_TICK_INTERVAL_MS`, `PULSEBOARD_SEED`, `PULSEBOARD_TREND_MODE`
//! - `PULSEBOARD_LOG_LEVEL`, `PULSEBOARD_LOG_FORMAT`
//! - `RUST_LOG`: full filter directive, wins over the configured level

use anyhow::Context;
use clap::Parser;
use pulseboard::api::{serve, AppState};
use pulseboard::config::Config;
use pulseboard::telemetry::init_tracing;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live analytics dashboard server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, source) = match &args.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
            (config, Some(path.clone()))
        }
        None => Config::load_default().context("Failed to load config")?,
    };

    init_tracing(&config.logging)?;

    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    tracing::info!("Starting Pulseboard server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        tick_interval_ms = config.simulator.tick_interval_ms,
        trend_mode = %config.simulator.trend_mode,
        seeded = config.simulator.seed.is_some(),
        max_connections = config.hub.max_connections,
        "Simulator settings"
    );

    serve(AppState::new(config)).await?;

    tracing::info!("Pulseboard server stopped");
    Ok(())
}
