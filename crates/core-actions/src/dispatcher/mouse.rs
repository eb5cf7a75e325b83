//! Pointer gestures and scrolling.
//!
//! Press: count the click (presses within `multi_click_ms` continue a
//! sequence). One click places the caret and arms a drag anchored at the
//! press offset; shift+click extends from the existing anchor instead. Two
//! clicks select the word under the pointer, three or more the logical line.
//! Drag rows use nearest-row rounding so the selection follows the pointer
//! across row midlines.

use super::{DispatchResult, reveal_caret};
use crate::Modifiers;
use core_model::{EditorModel, RowRounding};
use core_text::motion;
use tracing::trace;

pub(crate) fn press(
    model: &mut EditorModel,
    x: i32,
    y: i32,
    time_ms: u64,
    mods: Modifiers,
) -> DispatchResult {
    model.focused = true;
    let offset = model.point_to_offset(x, y, RowRounding::Truncate);
    let interval = model.options().multi_click_ms;
    let count = model.pointer.register_press(time_ms, interval);
    trace!(target: "actions.dispatch", op = "press", offset, count, "mouse");
    match count {
        1 => {
            let state = model.state_mut();
            state.move_caret(offset, mods.shift());
            let anchor = state.anchor().unwrap_or(offset);
            model.pointer.begin_drag(anchor);
        }
        2 => {
            let (a, b) = motion::word_at(model.state().buffer(), offset);
            model.state_mut().select_range(a, b);
            model.pointer.drag_anchor = None;
        }
        _ => {
            let (a, b) = motion::line_at(model.state().buffer(), offset);
            model.state_mut().select_range(a, b);
            model.pointer.drag_anchor = None;
        }
    }
    reveal_caret(model)
}

pub(crate) fn drag(model: &mut EditorModel, x: i32, y: i32) -> DispatchResult {
    let Some(anchor) = model.pointer.drag_anchor.filter(|_| model.pointer.pressed) else {
        return DispatchResult::clean();
    };
    let offset = model.point_to_offset(x, y, RowRounding::Nearest);
    model.state_mut().select_range(anchor, offset);
    reveal_caret(model)
}

pub(crate) fn release(model: &mut EditorModel) -> DispatchResult {
    model.pointer.release();
    DispatchResult::clean()
}

pub(crate) fn wheel(model: &mut EditorModel, delta: i32) -> DispatchResult {
    let (lh, rows) = {
        let layout = model.ensure_layout();
        (layout.line_height(), layout.row_count())
    };
    let step = lh * model.options().wheel_lines;
    DispatchResult::from_flag(model.view.scroll_wheel(delta, step, rows, lh))
}

/// Scroll one content height and carry the caret the same number of rows.
pub(crate) fn page(model: &mut EditorModel, down: bool) -> DispatchResult {
    let (lh, rows) = {
        let layout = model.ensure_layout();
        (layout.line_height(), layout.row_count())
    };
    if down {
        model.view.page_down(rows, lh);
    } else {
        model.view.page_up();
    }
    let step = (model.view.content_height() / lh.max(1)).max(1) as usize;
    let pos = model.caret_visual();
    let row = if down {
        (pos.row + step).min(rows.saturating_sub(1))
    } else {
        pos.row.saturating_sub(step)
    };
    let target = model.row_x_to_offset(row, pos.x as i32);
    model.state_mut().move_caret(target, false);
    reveal_caret(model)
}
