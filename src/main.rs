//! Server binary for the MinWinTid mock service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minwintid_mock::api::{create_router, AppState};
use minwintid_mock::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env().context("failed to load configuration")?;
    let bind_addr = config.bind_addr;
    info!(addr = %bind_addr, "MinWinTid mock starting up");

    let state = AppState::new(config);
    let router = create_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, router)
        .await
        .context("server exited with an error")?;

    Ok(())
}
