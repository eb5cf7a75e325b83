//! Text measurement capability.
//!
//! The layout engine and the coordinate translator never invent widths; every
//! pixel value comes from a `TextMeasure` handed in by the host. Any
//! `Fn(&str) -> u32` closure is a measurer, which keeps tests deterministic:
//!
//! ```
//! use core_model::TextMeasure;
//! let stub = |s: &str| s.chars().count() as u32 * 10;
//! assert_eq!(stub.text_width("hello"), 50);
//! assert_eq!(stub.line_height(), 16);
//! ```

use unicode_width::UnicodeWidthStr;

/// Glyph height assumed when a measurer does not report one.
pub const DEFAULT_LINE_HEIGHT: u32 = 16;

pub trait TextMeasure {
    /// Rendered width of `text` in pixels. Must be deterministic within one layout pass.
    fn text_width(&self, text: &str) -> u32;

    /// Glyph height in pixels, excluding line spacing.
    fn line_height(&self) -> u32 {
        DEFAULT_LINE_HEIGHT
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> u32,
{
    fn text_width(&self, text: &str) -> u32 {
        self(text)
    }
}

/// Fixed-pitch measurer: terminal cell count (`unicode-width`) times `cell_width`.
///
/// Wide CJK glyphs count as two cells, combining marks as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasure {
    pub cell_width: u32,
    pub line_height: u32,
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self {
            cell_width: 8,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

impl CellMeasure {
    pub fn new(cell_width: u32, line_height: u32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }
}

impl TextMeasure for CellMeasure {
    fn text_width(&self, text: &str) -> u32 {
        UnicodeWidthStr::width(text) as u32 * self.cell_width
    }

    fn line_height(&self) -> u32 {
        self.line_height
    }
}
