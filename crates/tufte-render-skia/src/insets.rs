// File: crates/tufte-render-skia/src/insets.rs
// Summary: Margins around the plot area, sized for bar totals, category labels and the legend gutter.

/// Left edge of the legend swatches, measured from the plot's right edge.
pub const LEGEND_OFFSET: f32 = 8.0;
/// Gap between a legend swatch and its label.
pub const SWATCH_GAP: f32 = 6.0;
/// Rough advance of one label character, as a fraction of the font size.
const CHAR_ADVANCE: f32 = 0.6;

/// Pixel margins; the plot occupies what is left of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins for `font_size` text: one label line above the tallest bar, one
    /// below the index axis, and a right gutter holding a swatch plus
    /// `legend_chars` characters of legend text.
    pub fn fitted(font_size: f32, legend_chars: usize) -> Self {
        let size = font_size.max(1.0);
        let line = (size * 1.5).ceil() as u32;
        let gutter = LEGEND_OFFSET + size + SWATCH_GAP + size * CHAR_ADVANCE * legend_chars as f32;
        Self {
            left: line,
            right: (gutter + LEGEND_OFFSET).ceil() as u32,
            top: line + 4,
            bottom: line + 8,
        }
    }

    /// Same as [`Insets::fitted`], sized for the longest of `labels`.
    pub fn for_legend<'a>(font_size: f32, labels: impl IntoIterator<Item = &'a str>) -> Self {
        let longest = labels.into_iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self::fitted(font_size, longest)
    }

    pub const fn horizontal(&self) -> u32 { self.left + self.right }

    pub const fn vertical(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Fitted for 12px text and legend labels up to 16 characters.
    fn default() -> Self {
        Self::fitted(12.0, 16)
    }
}
