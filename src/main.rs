// ABOUTME: Entry point for the grocerd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use grocerd_server::{AppState, GrocerdConfig, create_router, load_credentials};
use grocerd_store::ListStore;

/// File-backed grocery list HTTP service.
#[derive(Debug, Parser)]
#[command(name = "grocerd", version, about)]
struct Cli {
    /// Socket address to bind (overrides GROCERD_BIND).
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Path to the grocery list JSON file (overrides GROCERD_DATA).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Path to the Basic auth credentials file (overrides GROCERD_CREDENTIALS).
    #[arg(long)]
    credentials: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grocerd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GrocerdConfig::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(credentials) = cli.credentials {
        config.credentials_path = Some(credentials);
    }

    let credentials = config
        .credentials_path
        .as_deref()
        .map(load_credentials)
        .transpose()?;
    if credentials.is_some() {
        tracing::info!("basic auth enabled");
    } else {
        tracing::warn!("no credentials file configured, serving unauthenticated");
    }

    let store = ListStore::open(&config.data_path).with_context(|| {
        format!(
            "failed to load grocery list from {}",
            config.data_path.display()
        )
    })?;
    tracing::info!(
        path = %config.data_path.display(),
        items = store.items().await.len(),
        "grocery list loaded"
    );

    let state = Arc::new(AppState::new(store));
    let app = create_router(state, credentials);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
