//! Caret target computation.
//!
//! Pure functions over a `Buffer` and an absolute caret offset. They return
//! the new offset and never mutate; selection/anchor bookkeeping is layered on
//! top by `core-state`. Vertical motion depends on the wrapped layout and is
//! handled in `core-model`.

use crate::word::{scan_word_back, scan_word_forward, word_bounds};
use crate::Buffer;

/// One character left, clamped at buffer start.
pub fn left(_buf: &Buffer, caret: usize) -> usize {
    caret.saturating_sub(1)
}

/// One character right, clamped at buffer end.
pub fn right(buf: &Buffer, caret: usize) -> usize {
    (caret + 1).min(buf.len())
}

/// Previous word boundary: skip whitespace, then a run of word characters.
///
/// At column 0 the caret moves to the end of the previous logical line. If
/// the scan cannot move (punctuation directly left of the caret) it steps a
/// single character instead.
pub fn word_left(buf: &Buffer, caret: usize) -> usize {
    let caret = caret.min(buf.len());
    if caret == 0 {
        return 0;
    }
    let line = buf.lines().line_of(caret);
    let start = buf.line_start(line);
    let col = caret - start;
    if col == 0 {
        return buf.line_end(line - 1);
    }
    let target = start + scan_word_back(&buf.line_chars(line), col);
    if target == caret { caret - 1 } else { target }
}

/// Next word boundary: skip whitespace, then a run of word characters.
///
/// At the end of a logical line the caret moves to the start of the next one.
/// If the scan cannot move it steps a single character instead.
pub fn word_right(buf: &Buffer, caret: usize) -> usize {
    let len = buf.len();
    if caret >= len {
        return len;
    }
    let line = buf.lines().line_of(caret);
    let start = buf.line_start(line);
    let target = start + scan_word_forward(&buf.line_chars(line), caret - start);
    if target == caret { caret + 1 } else { target }
}

/// Start of the span Ctrl+Backspace removes: the within-line scan only.
///
/// Unlike `word_left` this never crosses a line break and never forces a
/// step, so it returns `caret` when there is nothing to traverse.
pub fn word_scan_back(buf: &Buffer, caret: usize) -> usize {
    let caret = caret.min(buf.len());
    let line = buf.lines().line_of(caret);
    let start = buf.line_start(line);
    start + scan_word_back(&buf.line_chars(line), caret - start)
}

/// End of the span Ctrl+Delete removes; `caret` when nothing is traversed.
pub fn word_scan_forward(buf: &Buffer, caret: usize) -> usize {
    let caret = caret.min(buf.len());
    let line = buf.lines().line_of(caret);
    let start = buf.line_start(line);
    start + scan_word_forward(&buf.line_chars(line), caret - start)
}

/// Start of the logical line holding `caret`.
pub fn line_home(buf: &Buffer, caret: usize) -> usize {
    buf.line_start(buf.lines().line_of(caret.min(buf.len())))
}

/// End of the logical line holding `caret` (before its newline).
pub fn line_end(buf: &Buffer, caret: usize) -> usize {
    buf.line_end(buf.lines().line_of(caret.min(buf.len())))
}

pub fn buffer_home(_buf: &Buffer) -> usize {
    0
}

pub fn buffer_end(buf: &Buffer) -> usize {
    buf.len()
}

/// Word span under `offset` (double-click). Empty lines yield an empty span at the line start.
pub fn word_at(buf: &Buffer, offset: usize) -> (usize, usize) {
    let offset = offset.min(buf.len());
    let line = buf.lines().line_of(offset);
    let start = buf.line_start(line);
    let (a, b) = word_bounds(&buf.line_chars(line), offset - start);
    (start + a, start + b)
}

/// Span of the logical line under `offset` (triple-click), newline excluded.
pub fn line_at(buf: &Buffer, offset: usize) -> (usize, usize) {
    let line = buf.lines().line_of(offset.min(buf.len()));
    (buf.line_start(line), buf.line_end(line))
}
