//! Wallpaper rasterization: draws a [`LayoutResult`] onto a black canvas and
//! encodes it as JPEG.
//!
//! The font is loaded once at startup and shared read-only across requests.
//! When no font file can be read the service still answers layout queries
//! using the static metric tables; only image rendering is unavailable.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use thiserror::Error;
use tracing::{info, warn};

use crate::layout::font_metrics::FontMetricTable;
use crate::layout::{get_metrics, FontFamily, LayoutConstraints, LayoutResult, TextExtent, TextMeasurer};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const JPEG_QUALITY: u8 = 90;

/// Tried in order after the configured font path.
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no font available for rendering")]
    FontUnavailable,

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Measures with real glyph outlines when a font is loaded, otherwise with the
/// static table for the configured family.
pub enum Measurer<'a> {
    Glyph(&'a FontArc),
    Static(&'static FontMetricTable),
}

impl TextMeasurer for Measurer<'_> {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent {
        match self {
            Measurer::Glyph(font) => {
                let scale = PxScale::from(font_size as f32);
                let (width, _) = text_size(scale, *font, text);
                // Line height comes from the face, not the glyphs, so blank and
                // short lines share the same pitch.
                let height = font.as_scaled(scale).height().ceil();
                TextExtent {
                    width: width as i32,
                    height: height as i32,
                }
            }
            Measurer::Static(table) => table.measure(text, font_size),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

pub struct WallpaperRenderer {
    font: Option<FontArc>,
    family: FontFamily,
}

impl WallpaperRenderer {
    pub fn new(font: Option<FontArc>, family: FontFamily) -> Self {
        Self { font, family }
    }

    /// Loads the configured font, falling back to common system fonts.
    pub fn load(font_path: &Path, family: FontFamily) -> Self {
        let candidates = std::iter::once(font_path.to_path_buf())
            .chain(FALLBACK_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            match load_font(&path) {
                Ok(font) => {
                    info!(path = %path.display(), "font loaded");
                    return Self::new(Some(font), family);
                }
                Err(e) => warn!(path = %path.display(), "font not usable: {e}"),
            }
        }

        warn!("no font file could be loaded; image rendering is disabled");
        Self::new(None, family)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn measurer(&self) -> Measurer<'_> {
        match &self.font {
            Some(font) => Measurer::Glyph(font),
            None => Measurer::Static(get_metrics(self.family)),
        }
    }

    /// Draws every positioned line and the reference, then encodes as JPEG.
    pub fn render(
        &self,
        layout: &LayoutResult,
        constraints: &LayoutConstraints,
    ) -> Result<Vec<u8>, RenderError> {
        let font = self.font.as_ref().ok_or(RenderError::FontUnavailable)?;

        let (width, height) = (constraints.canvas_width, constraints.canvas_height);
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidCanvas { width, height });
        }

        let mut canvas = RgbImage::from_pixel(width as u32, height as u32, BACKGROUND);

        let verse_scale = PxScale::from(layout.font_size as f32);
        for line in layout.lines.iter().filter(|l| !l.text.is_empty()) {
            draw_text_mut(&mut canvas, TEXT_COLOR, line.x, line.y, verse_scale, font, &line.text);
        }

        let reference = &layout.reference;
        let reference_scale = PxScale::from(layout.reference_font_size as f32);
        draw_text_mut(
            &mut canvas,
            TEXT_COLOR,
            reference.x,
            reference.y,
            reference_scale,
            font,
            &reference.text,
        );

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(&canvas)?;
        Ok(jpeg)
    }
}

fn load_font(path: &Path) -> anyhow::Result<FontArc> {
    let bytes = std::fs::read(path)?;
    Ok(FontArc::try_from_vec(bytes)?)
}
