use anyhow::Context;
use gallery_api::{AppState, ServerConfig, app};
use gallery_core::GalleryConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let gallery_config = GalleryConfig::from_env().context("invalid gallery configuration")?;
    let server_config = ServerConfig::from_env().context("invalid server configuration")?;

    let state = AppState::new(&gallery_config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_addr))?;
    tracing::info!(addr = %server_config.bind_addr, "gallery API listening");

    axum::serve(listener, router).await?;
    Ok(())
}
