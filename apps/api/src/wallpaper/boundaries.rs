//! Text-band boundaries from query parameters, in pixels or screen percentages.

use serde::Deserialize;

use crate::layout::engine::{DEFAULT_BOTTOM_BOUNDARY, DEFAULT_TOP_BOUNDARY};

/// Raw boundary parameters. Kept as strings so a malformed value degrades to
/// the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct BoundaryParams {
    pub top_boundary: Option<String>,
    pub bottom_boundary: Option<String>,
    pub screen_height: Option<String>,
    pub top_boundary_percent: Option<String>,
    pub bottom_boundary_percent: Option<String>,
}

/// Resolves `(top, bottom)` in pixels.
///
/// Percent mode applies when all three of `screen_height`,
/// `top_boundary_percent` and `bottom_boundary_percent` are non-empty; the
/// bottom percentage is measured up from the bottom of the screen. Otherwise
/// the pixel values are used. Any parse failure discards both values; missing
/// values take the defaults independently.
pub fn resolve_boundaries(params: &BoundaryParams) -> (i32, i32) {
    let (top, bottom) = parse_boundaries(params).unwrap_or((None, None));
    (
        top.unwrap_or(DEFAULT_TOP_BOUNDARY),
        bottom.unwrap_or(DEFAULT_BOTTOM_BOUNDARY),
    )
}

type Parsed = (Option<i32>, Option<i32>);

fn parse_boundaries(params: &BoundaryParams) -> Option<Parsed> {
    let percent_mode = (
        present(&params.screen_height),
        present(&params.top_boundary_percent),
        present(&params.bottom_boundary_percent),
    );

    if let (Some(height), Some(top_percent), Some(bottom_percent)) = percent_mode {
        let height = f64::from(height.parse::<i32>().ok()?);
        let top_percent = top_percent.parse::<f64>().ok()?;
        let bottom_percent = bottom_percent.parse::<f64>().ok()?;

        let top = to_pixels(height * (top_percent / 100.0))?;
        let bottom = to_pixels(height * ((100.0 - bottom_percent) / 100.0))?;
        return Some((Some(top), Some(bottom)));
    }

    let top = present(&params.top_boundary)
        .map(|v| v.parse::<i32>())
        .transpose()
        .ok()?;
    let bottom = present(&params.bottom_boundary)
        .map(|v| v.parse::<i32>())
        .transpose()
        .ok()?;
    Some((top, bottom))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Truncates toward zero; NaN and out-of-range values are parse failures.
fn to_pixels(value: f64) -> Option<i32> {
    (value.is_finite() && value.abs() < f64::from(i32::MAX)).then(|| value.trunc() as i32)
}
