//! Frame assembly from the model.

use core_model::{EditorModel, wrap::WrappedLine};
use std::time::Instant;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFrame {
    /// Visual row index in the layout.
    pub row: usize,
    pub logical_line: usize,
    /// Absolute offset of the row's first character.
    pub start_offset: usize,
    pub text: String,
    pub y: i32,
    /// 1-based line number, present on the first row of each logical line.
    pub gutter_number: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<RowFrame>,
    pub selection: Vec<Rect>,
    pub caret: Option<Rect>,
    pub line_height: u32,
    pub content_left: i32,
    pub content_top: i32,
    pub gutter_width: u32,
    /// Time spent assembling this frame.
    pub build_ns: u64,
}

/// Build the visible part of the model. The caret rect is included only when
/// the model is focused, `caret_on` is true, and the caret row is visible.
pub fn build_frame(model: &mut EditorModel, caret_on: bool) -> Frame {
    let started = Instant::now();
    let caret_pos = model.caret_visual();
    let view = model.view;
    let caret_width = model.options().caret_width;
    let focused = model.focused;
    let layout = model.layout();
    let buffer = model.state().buffer();
    let measure = model.measure();

    let lh = layout.line_height().max(1);
    let content_left = view.content_left() as i32;
    let content_top = view.content_top() as i32;
    let row_count = layout.row_count();
    let first = view.first_visible_row(lh);
    let visible = (view.content_height() / lh) as usize + 2;
    let last = (first + visible).min(row_count.saturating_sub(1));
    let scroll_rem = (view.scroll_y % lh) as i32;

    let (sel_a, sel_b) = model.state().selection().range();
    let mut rows = Vec::new();
    let mut selection = Vec::new();
    let mut y = content_top - scroll_rem;
    for (r, wl) in layout
        .lines()
        .iter()
        .enumerate()
        .take(last + 1)
        .skip(first)
    {
        let start = row_start(layout.is_degraded(), buffer, wl);
        let end = start + wl.char_len();
        if sel_a < sel_b && !(sel_b <= start || sel_a >= end) {
            let local_a = sel_a.saturating_sub(start);
            let local_b = sel_b.min(end) - start;
            let left: String = wl.text.chars().take(local_a).collect();
            let part: String = wl.text.chars().skip(local_a).take(local_b - local_a).collect();
            selection.push(Rect {
                x: content_left + measure.text_width(&left) as i32,
                y,
                width: measure.text_width(&part),
                height: lh,
            });
        }
        rows.push(RowFrame {
            row: r,
            logical_line: wl.logical_line,
            start_offset: start,
            text: wl.text.clone(),
            y,
            gutter_number: (wl.start_char == 0).then_some(wl.logical_line + 1),
        });
        y += lh as i32;
    }

    let caret = (focused && caret_on && caret_pos.row >= first && caret_pos.row <= last).then(|| {
        Rect {
            x: content_left + caret_pos.x as i32,
            y: content_top + ((caret_pos.row - first) as u32 * lh) as i32 - scroll_rem,
            width: caret_width,
            height: lh,
        }
    });

    let elapsed = started.elapsed().as_nanos() as u64;
    trace!(target: "render", rows = rows.len(), selection_rects = selection.len(), caret = caret.is_some(), elapsed_ns = elapsed, "frame_built");
    Frame {
        rows,
        selection,
        caret,
        line_height: lh,
        content_left,
        content_top,
        gutter_width: view.gutter_width,
        build_ns: elapsed,
    }
}

fn row_start(degraded: bool, buffer: &core_text::Buffer, wl: &WrappedLine) -> usize {
    if degraded {
        wl.start_char
    } else {
        buffer.line_start(wl.logical_line) + wl.start_char
    }
}
