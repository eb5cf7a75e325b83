//! Caret motion.
//!
//! Horizontal and home/end targets come from `core_text::motion` and work in
//! logical coordinates. Up/down keep the caret's pixel x and move one visual
//! row through the coordinate translator, so they step through wrapped rows
//! of the same logical line.

use super::{DispatchResult, reveal_caret};
use crate::{Modifiers, Motion};
use core_model::EditorModel;
use core_text::motion;

pub(crate) fn handle_motion(model: &mut EditorModel, kind: Motion, mods: Modifiers) -> DispatchResult {
    let caret = model.state().caret();
    let target = {
        let buf = model.state().buffer();
        match (kind, mods.ctrl()) {
            (Motion::Left, false) => Some(motion::left(buf, caret)),
            (Motion::Left, true) => Some(motion::word_left(buf, caret)),
            (Motion::Right, false) => Some(motion::right(buf, caret)),
            (Motion::Right, true) => Some(motion::word_right(buf, caret)),
            (Motion::Home, false) => Some(motion::line_home(buf, caret)),
            (Motion::Home, true) => Some(motion::buffer_home(buf)),
            (Motion::End, false) => Some(motion::line_end(buf, caret)),
            (Motion::End, true) => Some(motion::buffer_end(buf)),
            (Motion::Up | Motion::Down, _) => None,
        }
    };
    let target = match target {
        Some(t) => t,
        None => vertical_target(model, kind == Motion::Down),
    };
    tracing::trace!(target: "actions.dispatch", op = "move", ?kind, from = caret, to = target, shift = mods.shift(), "motion");
    model.state_mut().move_caret(target, mods.shift());
    reveal_caret(model)
}

/// Same pixel x on the adjacent visual row, clamped at the first/last row.
fn vertical_target(model: &mut EditorModel, down: bool) -> usize {
    let pos = model.caret_visual();
    let rows = model.row_count();
    let row = if down {
        (pos.row + 1).min(rows.saturating_sub(1))
    } else {
        pos.row.saturating_sub(1)
    };
    model.row_x_to_offset(row, pos.x as i32)
}
