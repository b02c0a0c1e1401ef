use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::layout::LayoutConstraints;
use crate::reference::{format_for_biblegateway, generate_filename};
use crate::state::AppState;
use crate::wallpaper::boundaries::{resolve_boundaries, BoundaryParams};
use crate::wallpaper::compose;

const FALLBACK_FILENAME: &str = "scripture_wallpaper.jpg";
const VERSE_DATA_DEFAULT_VERSION: &str = "NIV";

#[derive(Debug, Deserialize)]
pub struct WallpaperQuery {
    pub q: Option<String>,
    pub version: Option<String>,
    #[serde(flatten)]
    pub boundaries: BoundaryParams,
}

impl WallpaperQuery {
    fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    fn version_or(&self, default: &str) -> String {
        self.version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerseDataResponse {
    pub text: String,
    pub reference: String,
    pub optimal_font_size: u32,
}

/// GET /api/image
pub async fn handle_image(
    State(state): State<AppState>,
    Query(params): Query<WallpaperQuery>,
) -> Result<Response, AppError> {
    let q = params.query().ok_or_else(|| {
        AppError::Validation("Missing required parameter 'q' (Bible reference)".to_string())
    })?;
    let version = params.version_or(&state.config.default_version);

    let formatted = format_for_biblegateway(q)
        .ok_or_else(|| AppError::Validation(format!("Could not parse Bible reference: '{q}'")))?;

    let passage = state.source.fetch(&formatted, &version).await.map_err(|e| {
        warn!(query = %formatted, %version, "passage fetch failed: {e}");
        AppError::Upstream(format!("Failed to fetch verse: '{formatted}' ({version})"))
    })?;

    let (top, bottom) = resolve_boundaries(&params.boundaries);
    let constraints = LayoutConstraints::with_boundaries(top, bottom);
    let renderer = state.renderer.clone();

    // Layout and rasterization are CPU-bound; keep them off the async executor.
    let jpeg = tokio::task::spawn_blocking(move || {
        let result = compose(&passage, &constraints, &renderer);
        renderer.render(&result, &constraints)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    let filename = generate_filename(q).unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    info!(%filename, bytes = jpeg.len(), "wallpaper rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        jpeg,
    )
        .into_response())
}

/// GET /api/verse-data
/// Cleaned text and the font size the wallpaper would use, for client-side editors.
pub async fn handle_verse_data(
    State(state): State<AppState>,
    Query(params): Query<WallpaperQuery>,
) -> Result<Json<VerseDataResponse>, AppError> {
    let q = params
        .query()
        .ok_or_else(|| AppError::Validation("Missing 'q' parameter".to_string()))?;
    let version = params.version_or(VERSE_DATA_DEFAULT_VERSION);

    let passage = state.source.fetch(q, &version).await.map_err(|e| {
        warn!(query = %q, %version, "passage fetch failed: {e}");
        AppError::NotFound(format!("Could not find verse: {q}"))
    })?;

    let (top, bottom) = resolve_boundaries(&params.boundaries);
    let constraints = LayoutConstraints::with_boundaries(top, bottom);
    let renderer = state.renderer.clone();

    let (passage, font_size) = tokio::task::spawn_blocking(move || {
        let font_size = compose(&passage, &constraints, &renderer).font_size;
        (passage, font_size)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))?;

    Ok(Json(VerseDataResponse {
        text: passage.text,
        reference: passage.reference,
        optimal_font_size: font_size,
    }))
}
