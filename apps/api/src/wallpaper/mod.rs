// Wallpaper endpoints: fetch a passage, lay it out, render or describe it.

pub mod boundaries;
pub mod handlers;

use tracing::{debug, warn};

use crate::layout::{layout, LayoutConstraints, LayoutResult};
use crate::passage::Passage;
use crate::render::WallpaperRenderer;

/// Lays out a passage for the given text band. CPU-bound; call from
/// `spawn_blocking` inside handlers.
pub fn compose(
    passage: &Passage,
    constraints: &LayoutConstraints,
    renderer: &WallpaperRenderer,
) -> LayoutResult {
    let result = layout(
        &passage.text,
        &passage.reference,
        constraints,
        &renderer.measurer(),
    );

    if result.fits {
        debug!(
            reference = %passage.reference,
            font_size = result.font_size,
            lines = result.lines.len(),
            "passage laid out"
        );
    } else {
        warn!(
            reference = %passage.reference,
            font_size = result.font_size,
            content_height = result.total_content_height,
            usable_height = constraints.usable_height(),
            "passage overflows the text band at the minimum font size"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FontFamily;

    fn passage(text: &str) -> Passage {
        Passage {
            text: text.to_string(),
            reference: "John 3:16".to_string(),
            version: "NIV".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_compose_uses_renderer_measurer() {
        let renderer = WallpaperRenderer::new(None, FontFamily::Montserrat);
        let result = compose(
            &passage("For God so loved the world"),
            &LayoutConstraints::default(),
            &renderer,
        );
        assert!(result.fits);
        assert_eq!(result.reference.text, "John 3:16");
        assert_eq!(result.font_size, 64);
    }

    #[test]
    fn test_compose_degrades_in_narrow_band() {
        let renderer = WallpaperRenderer::new(None, FontFamily::DejaVuSans);
        let text = "For God so loved the world ".repeat(20);
        let result = compose(
            &passage(&text),
            &LayoutConstraints::with_boundaries(1000, 1100),
            &renderer,
        );
        assert!(!result.fits);
        assert_eq!(result.font_size, 20);
    }
}
