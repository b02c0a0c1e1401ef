use std::sync::Arc;

use crate::config::Config;
use crate::passage::PassageSource;
use crate::render::WallpaperRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable passage source. Production: BibleGatewayClient; tests use a stub.
    pub source: Arc<dyn PassageSource>,
    /// Loaded once at startup; measurement and drawing are read-only.
    pub renderer: Arc<WallpaperRenderer>,
}
