//! Coordinate translation between absolute offsets, logical (line, column)
//! and visual (row, pixel x).
//!
//! All functions are pure over an already ensured `TextLayout`. Inputs are
//! clamped rather than rejected.

use crate::layout::TextLayout;
use crate::measure::TextMeasure;
use crate::wrap::char_prefix;
use core_text::Buffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualPos {
    pub row: usize,
    pub x: u32,
    pub y: u32,
}

/// Offsets past the end are treated as the buffer length.
pub fn offset_to_line_col(buffer: &Buffer, offset: usize) -> (usize, usize) {
    let offset = offset.min(buffer.len());
    let line = buffer.lines().line_of(offset);
    (line, offset - buffer.line_start(line))
}

/// Clamps `line` to the last line and `col` to the line length.
pub fn line_col_to_offset(buffer: &Buffer, line: usize, col: usize) -> usize {
    let line = line.min(buffer.line_count() - 1);
    buffer.line_start(line) + col.min(buffer.line_len(line))
}

/// Row and pixel position of the caret slot at `offset`.
///
/// A column exactly at a wrap boundary matches both rows; the earlier row
/// wins. A degraded (unwrapped) layout places every offset on row 0.
pub fn offset_to_visual(
    layout: &TextLayout,
    buffer: &Buffer,
    measure: &dyn TextMeasure,
    offset: usize,
) -> VisualPos {
    let lh = layout.line_height();
    if layout.is_degraded() {
        let col = offset.min(buffer.len());
        let text = layout.row(0).map_or("", |r| r.text.as_str());
        return VisualPos {
            row: 0,
            x: measure.text_width(char_prefix(text, col)),
            y: 0,
        };
    }

    let (line, col) = offset_to_line_col(buffer, offset);
    if let Some(first) = layout.first_row_of(line) {
        for (row, wl) in layout.lines().iter().enumerate().skip(first) {
            if wl.logical_line != line {
                break;
            }
            if col >= wl.start_char && col <= wl.end_char() {
                return VisualPos {
                    row,
                    x: measure.text_width(char_prefix(&wl.text, col - wl.start_char)),
                    y: row as u32 * lh,
                };
            }
        }
    }

    let row = layout.row_count().saturating_sub(1);
    let x = layout.row(row).map_or(0, |wl| measure.text_width(&wl.text));
    VisualPos {
        row,
        x,
        y: row as u32 * lh,
    }
}

/// Offset under pixel `x` on visual `row` (clamped to the existing rows).
///
/// Prefixes of the row are measured in increasing length; the first one
/// whose width reaches `x` wins, so a click lands on the left edge of the
/// glyph it hits. Past the end of the row yields the row end.
pub fn visual_to_offset(
    layout: &TextLayout,
    buffer: &Buffer,
    measure: &dyn TextMeasure,
    row: usize,
    x: i32,
) -> usize {
    let Some(wl) = layout.row(row.min(layout.row_count().saturating_sub(1))) else {
        return 0;
    };
    let mut col = 0usize;
    let mut boundaries = wl.text.char_indices().map(|(idx, ch)| idx + ch.len_utf8());
    let mut end = 0usize;
    loop {
        if i64::from(measure.text_width(&wl.text[..end])) >= i64::from(x) {
            break;
        }
        match boundaries.next() {
            Some(next) => {
                end = next;
                col += 1;
            }
            None => break,
        }
    }
    let base = if layout.is_degraded() {
        0
    } else {
        buffer.line_start(wl.logical_line)
    };
    (base + wl.start_char + col).min(buffer.len())
}
