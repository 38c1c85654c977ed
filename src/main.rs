use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use partyd::{config::PartyConfig, rest, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(name = "partyd", about = "Balloonicorn's party RSVP service", version)]
struct Args {
    /// HTTP port
    #[arg(long, env = "PARTYD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "PARTYD_BIND")]
    bind: Option<String>,

    /// Path to a config.toml with party details and the treat menu
    #[arg(long, env = "PARTYD_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PARTYD_LOG")]
    log: Option<String>,
}

fn setup_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the configured level when set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = PartyConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.port, args.bind, args.log);

    setup_logging(&config.log);
    if let Some(path) = &args.config {
        info!("loaded config from {}", path.display());
    }
    info!(
        "partyd v{} — {} treats on the menu",
        env!("CARGO_PKG_VERSION"),
        config.treats.len()
    );

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx)
        .await
        .context("HTTP server failed")?;
    Ok(())
}
