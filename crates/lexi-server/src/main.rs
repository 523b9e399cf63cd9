//! Lexi REST server.
//!
//! Serves the word store and dictionary cache as JSON endpoints under
//! `/api`. The database handle is opened once at startup and shared with
//! all handlers through [`state::AppState`].

mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use figment::providers::{Format, Toml};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexi_config::LexiConfig;
use lexi_db::LexiDb;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "lexid", about = "Lexi vocabulary server", version)]
struct Args {
    /// Extra config file, merged over the standard layers.
    #[arg(long)]
    config: Option<String>,

    /// Database file path (overrides config).
    #[arg(long)]
    db: Option<String>,

    /// Listen address as host:port (overrides config).
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("lexid error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexid=debug,lexi_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let db_path = args.db.unwrap_or(config.database.path);
    let listen = args
        .listen
        .unwrap_or_else(|| config.server.listen_addr());

    let db = LexiDb::open_local(&db_path)
        .await
        .with_context(|| format!("failed to open database at {db_path}"))?;
    tracing::info!(path = %db_path, "database ready");

    let app = routes::build_router(AppState::new(Arc::new(db)));

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;
    tracing::info!("listening on {listen}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn load_config(extra: Option<&str>) -> anyhow::Result<LexiConfig> {
    // Loads .env and the standard layers; an explicit --config file is
    // merged on top of everything, including the environment.
    let config = LexiConfig::load_with_dotenv().context("failed to load configuration")?;
    match extra {
        None => Ok(config),
        Some(path) => LexiConfig::figment()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("failed to load configuration from {path}")),
    }
}
