//! Salary rate HTTP server.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_rate::api::{AppState, create_router};
use salary_rate::config::ConfigLoader;

/// Serves the salary rate API.
#[derive(Parser, Debug)]
#[command(name = "salary-rate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/salary-rate.yaml")]
    config: PathBuf,

    /// Log filter directive (e.g. "info", "salary_rate=debug")
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Overrides the configured bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let bind_address = args
        .bind
        .clone()
        .unwrap_or_else(|| config.server().bind_address.clone());

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!(address = %bind_address, "Salary rate API listening");

    axum::serve(listener, router)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
