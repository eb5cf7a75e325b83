//! Lazily recomputed wrapped-row cache.
//!
//! `TextLayout` is the single source of truth for visual geometry. It is
//! rebuilt wholesale (never patched) the next time a geometry query runs
//! after any of:
//! * an explicit `invalidate` (measurer or font swapped),
//! * a content width different from the one it was built for,
//! * a buffer revision different from the one it was built from.
//!
//! Geometry queries go through `ensure` first, so translation always sees
//! rows that match the buffer.

use crate::measure::{DEFAULT_LINE_HEIGHT, TextMeasure};
use crate::wrap::{WrappedLine, wrap_buffer};
use core_text::Buffer;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Extra pixels between rows.
    pub line_spacing: u32,
    pub min_content_width: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_spacing: 4,
            min_content_width: 10,
        }
    }
}

#[derive(Debug)]
pub struct TextLayout {
    lines: Vec<WrappedLine>,
    dirty: bool,
    built_revision: Option<u64>,
    built_width: u32,
    degraded: bool,
    line_height: u32,
    recomputes: u64,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayout {
    pub fn new() -> Self {
        Self {
            lines: vec![WrappedLine::new(0, 0, "")],
            dirty: true,
            built_revision: None,
            built_width: 0,
            degraded: false,
            line_height: DEFAULT_LINE_HEIGHT,
            recomputes: 0,
        }
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn needs_rebuild(&self, buffer: &Buffer, content_width: u32) -> bool {
        self.dirty
            || self.built_revision != Some(buffer.revision())
            || self.built_width != content_width
    }

    /// Rebuild if needed. Returns true when a recompute happened.
    pub fn ensure(
        &mut self,
        buffer: &Buffer,
        content_width: u32,
        measure: Option<&dyn TextMeasure>,
        opts: LayoutOptions,
    ) -> bool {
        if !self.needs_rebuild(buffer, content_width) {
            return false;
        }
        self.lines = wrap_buffer(buffer, content_width, measure, opts.min_content_width);
        self.degraded = measure.is_none();
        let glyph = measure.map_or(DEFAULT_LINE_HEIGHT, |m| m.line_height());
        self.line_height = (glyph + opts.line_spacing).max(1);
        self.built_revision = Some(buffer.revision());
        self.built_width = content_width;
        self.dirty = false;
        self.recomputes += 1;
        debug!(
            target: "model.layout",
            rows = self.lines.len(),
            logical_lines = buffer.line_count(),
            content_width,
            degraded = self.degraded,
            revision = buffer.revision(),
            "layout_recomputed"
        );
        true
    }

    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    pub fn row(&self, row: usize) -> Option<&WrappedLine> {
        self.lines.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// Glyph height plus line spacing.
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Total height of all rows.
    pub fn text_height(&self) -> u32 {
        self.lines.len() as u32 * self.line_height
    }

    /// Index of the first row of `logical_line`, if it has been laid out.
    pub fn first_row_of(&self, logical_line: usize) -> Option<usize> {
        let idx = self
            .lines
            .partition_point(|l| l.logical_line < logical_line);
        (idx < self.lines.len() && self.lines[idx].logical_line == logical_line).then_some(idx)
    }
}
