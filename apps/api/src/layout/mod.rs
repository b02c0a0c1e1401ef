// Text layout: shrink-to-fit wrapping and centering for the wallpaper canvas.
// Layout is CPU-bound; request handlers run it inside tokio::task::spawn_blocking.

pub mod engine;
pub mod font_metrics;

pub use engine::{layout, LayoutConstraints, LayoutResult, TextExtent, TextMeasurer};
pub use font_metrics::{get_metrics, FontFamily};
