mod config;
mod errors;
mod layout;
mod passage;
mod reference;
mod render;
mod routes;
mod state;
mod wallpaper;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::passage::BibleGatewayClient;
use crate::render::WallpaperRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scripture wallpaper API v{}", env!("CARGO_PKG_VERSION"));

    let source = BibleGatewayClient::new(&config.biblegateway_base_url, config.fetch_timeout)?;
    info!(
        "Passage source: {} (timeout {:?})",
        config.biblegateway_base_url, config.fetch_timeout
    );

    // Font loading reads from disk once; do it off the executor.
    let font_path = config.font_path.clone();
    let font_family = config.font_family;
    let renderer =
        tokio::task::spawn_blocking(move || WallpaperRenderer::load(&font_path, font_family)).await?;
    info!("Renderer ready (font loaded: {})", renderer.has_font());

    let state = AppState {
        config: config.clone(),
        source: Arc::new(source),
        renderer: Arc::new(renderer),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
