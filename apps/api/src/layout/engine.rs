//! Shrink-to-fit text layout for the wallpaper canvas.
//!
//! # Algorithm
//! 1. Wrap the verse at the current main font size. Each explicit line of the
//!    cleaned text wraps on its own; explicit breaks are never merged.
//! 2. Measure the block: line heights, inter-line gaps, the gap to the
//!    reference, and the reference itself.
//! 3. If the block is taller than the usable band, step the font size down and
//!    go back to 1. The loop is bounded by `(max - min) / step` iterations.
//! 4. At the floor the layout is accepted as is (`fits == false`). Overflow is
//!    a degraded result, not an error.
//! 5. Center the block vertically in the band and every line horizontally.
//!
//! Pure and synchronous. Measurement goes through [`TextMeasurer`], so the same
//! engine runs against real glyph metrics or a static table.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Measurement seam
// ────────────────────────────────────────────────────────────────────────────

/// Rendered size of a run of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Measures text at a font size. Implementations must be safe to call from
/// several layouts at once; they are read-only.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, u32) -> TextExtent,
{
    fn measure(&self, text: &str, font_size: u32) -> TextExtent {
        self(text, font_size)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Constraints and result
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of the canvas and the vertical band the text is centered in.
///
/// `top_boundary < bottom_boundary` is expected but not enforced: a
/// non-positive usable height still yields a (degenerate) layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstraints {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub horizontal_margin: i32,
    pub top_boundary: i32,
    pub bottom_boundary: i32,
    /// Extra inset applied inside both boundaries.
    pub boundary_margin: i32,
    /// Line pitch as a multiple of line height (1.3 = 30% gap between lines).
    pub line_spacing_factor: f64,
    /// Gap between the last verse line and the reference.
    pub inter_block_spacing: i32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub reference_font_size: u32,
    pub font_size_step: u32,
}

pub const DEFAULT_TOP_BOUNDARY: i32 = 890;
pub const DEFAULT_BOTTOM_BOUNDARY: i32 = 1620;

impl Default for LayoutConstraints {
    /// Phone wallpaper: 1080×2340, text band between ~5.5cm and ~10cm.
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            canvas_height: 2340,
            horizontal_margin: 80,
            top_boundary: DEFAULT_TOP_BOUNDARY,
            bottom_boundary: DEFAULT_BOTTOM_BOUNDARY,
            boundary_margin: 40,
            line_spacing_factor: 1.3,
            inter_block_spacing: 40,
            min_font_size: 20,
            max_font_size: 64,
            reference_font_size: 42,
            font_size_step: 2,
        }
    }
}

impl LayoutConstraints {
    /// Default geometry with a caller-supplied text band.
    pub fn with_boundaries(top_boundary: i32, bottom_boundary: i32) -> Self {
        Self {
            top_boundary,
            bottom_boundary,
            ..Self::default()
        }
    }

    pub fn usable_width(&self) -> i32 {
        self.canvas_width - 2 * self.horizontal_margin
    }

    /// May be zero or negative when the boundaries are inverted. Saturates at
    /// the `i32` range for extreme boundaries.
    pub fn usable_height(&self) -> i32 {
        saturate(self.band_height())
    }

    /// Top of the text band, margin included. Widened so query-supplied
    /// boundaries near `i32::MAX` can't overflow.
    fn band_top(&self) -> i64 {
        i64::from(self.top_boundary) + i64::from(self.boundary_margin)
    }

    fn band_height(&self) -> i64 {
        i64::from(self.bottom_boundary) - i64::from(self.boundary_margin) - self.band_top()
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// A line of text with its measured size and top-left draw position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Main font size the verse was wrapped at.
    pub font_size: u32,
    pub reference_font_size: u32,
    pub lines: Vec<PositionedLine>,
    pub total_content_height: i32,
    pub start_y: i32,
    pub reference: PositionedLine,
    /// False when even the floor font size overflows the band.
    pub fits: bool,
}

impl LayoutResult {
    pub fn wrapped_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays out verse text and its reference inside the constraints, using the
/// largest main font size (stepping down to the floor) whose block fits.
pub fn layout(
    verse: &str,
    reference: &str,
    constraints: &LayoutConstraints,
    measurer: &impl TextMeasurer,
) -> LayoutResult {
    let usable_width = constraints.usable_width();
    let usable_height = constraints.usable_height();
    let max_size = constraints.max_font_size;
    let min_size = constraints.min_font_size.min(max_size);
    let step = constraints.font_size_step.max(1);

    let reference_extent = measurer.measure(reference, constraints.reference_font_size);

    let mut font_size = max_size;
    let mut block = wrap_block(verse, font_size, usable_width, measurer);
    let mut total = content_height(&block, constraints, reference_extent.height);

    // Bounded search: one extra step covers a floor that isn't a multiple of `step`.
    let max_iterations = (max_size - min_size).div_ceil(step);
    for _ in 0..max_iterations {
        // Shrinking the main font can't help a block with no verse lines.
        if total <= usable_height || font_size <= min_size || block.is_empty() {
            break;
        }
        font_size = font_size.saturating_sub(step).max(min_size);
        block = wrap_block(verse, font_size, usable_width, measurer);
        total = content_height(&block, constraints, reference_extent.height);
    }

    let start_y = saturate(
        constraints.band_top() + (constraints.band_height() - i64::from(total)).div_euclid(2),
    );

    let mut lines = Vec::with_capacity(block.len());
    let mut y = start_y;
    let last = block.len().saturating_sub(1);
    for (i, line) in block.into_iter().enumerate() {
        let advance = if i < last {
            line.extent.height + line_gap(line.extent.height, constraints.line_spacing_factor)
        } else {
            line.extent.height
        };
        lines.push(PositionedLine {
            x: centered_x(constraints.canvas_width, line.extent.width),
            y,
            width: line.extent.width,
            height: line.extent.height,
            text: line.text,
        });
        y = y.saturating_add(advance);
    }

    let reference_y = if lines.is_empty() {
        start_y
    } else {
        y.saturating_add(constraints.inter_block_spacing)
    };

    LayoutResult {
        font_size,
        reference_font_size: constraints.reference_font_size,
        lines,
        total_content_height: total,
        start_y,
        reference: PositionedLine {
            text: reference.to_string(),
            x: centered_x(constraints.canvas_width, reference_extent.width),
            y: reference_y,
            width: reference_extent.width,
            height: reference_extent.height,
        },
        fits: total <= usable_height,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

struct WrappedLine {
    text: String,
    extent: TextExtent,
}

/// Wraps every explicit line of `verse` independently. A blank line (strophe
/// separator) becomes an empty wrapped line; blank text yields no lines.
fn wrap_block(
    verse: &str,
    font_size: u32,
    max_width: i32,
    measurer: &impl TextMeasurer,
) -> Vec<WrappedLine> {
    if verse.trim().is_empty() {
        return Vec::new();
    }

    verse
        .split('\n')
        .flat_map(|explicit| {
            if explicit.trim().is_empty() {
                vec![String::new()]
            } else {
                wrap_line(explicit, font_size, max_width, measurer)
            }
        })
        .map(|text| {
            let extent = measurer.measure(&text, font_size);
            WrappedLine { text, extent }
        })
        .collect()
}

/// Greedy word wrap of a single explicit line. Words are never split: a word
/// wider than `max_width` sits alone on its own line.
fn wrap_line(
    line: &str,
    font_size: u32,
    max_width: i32,
    measurer: &impl TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current.join(" "), word)
        };

        if measurer.measure(&candidate, font_size).width <= max_width {
            current.push(word);
        } else if !current.is_empty() {
            lines.push(current.join(" "));
            current = vec![word];
        } else {
            lines.push(word.to_string());
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Extra space below a line that is followed by another line.
fn line_gap(line_height: i32, line_spacing_factor: f64) -> i32 {
    (f64::from(line_height) * (line_spacing_factor - 1.0)) as i32
}

fn content_height(
    block: &[WrappedLine],
    constraints: &LayoutConstraints,
    reference_height: i32,
) -> i32 {
    if block.is_empty() {
        return reference_height;
    }
    let last = block.len() - 1;
    let verse_height: i32 = block
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let gap = if i < last {
                line_gap(line.extent.height, constraints.line_spacing_factor)
            } else {
                0
            };
            line.extent.height + gap
        })
        .sum();
    verse_height + constraints.inter_block_spacing + reference_height
}

fn centered_x(canvas_width: i32, line_width: i32) -> i32 {
    (canvas_width - line_width).div_euclid(2)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
