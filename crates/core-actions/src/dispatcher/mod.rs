//! Dispatcher applying `Command` to an `EditorModel`.
//!
//! Sub-modules:
//! * `motion`    - caret movement (plain, word, vertical, home/end)
//! * `edit`      - text mutation (insert/delete/backspace/newline/tab)
//! * `mouse`     - press/drag/release gestures, wheel and page scrolling
//! * `clipboard` - copy / cut / paste through the `Clipboard` capability
//! * `undo`      - undo / redo
//!
//! Every handler clamps through `EditorState`, so stale offsets from the host
//! never fail. Commands that move the caret finish by scrolling it into view.

use crate::{Clipboard, Command};
use core_model::EditorModel;
use tracing::trace;

mod clipboard;
mod edit;
mod motion;
mod mouse;
mod undo;

/// Result of dispatching a single `Command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Something visible changed (text, caret, selection, scroll, focus).
    pub dirty: bool,
    /// The buffer was rewritten (edit, cut, paste, undo, redo).
    pub text_changed: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            text_changed: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            text_changed: false,
        }
    }
    pub(crate) fn from_flag(dirty: bool) -> Self {
        if dirty { Self::dirty() } else { Self::clean() }
    }
}

/// Apply `cmd`. Keyboard commands are ignored while the model is unfocused.
pub fn dispatch(
    cmd: Command,
    model: &mut EditorModel,
    clipboard: &mut dyn Clipboard,
) -> DispatchResult {
    let name = cmd.name();
    if cmd.needs_focus() && !model.focused {
        trace!(target: "actions.dispatch", cmd = name, "ignored_unfocused");
        return DispatchResult::clean();
    }
    let revision = model.state().buffer().revision();

    let mut result = match cmd {
        Command::InsertText(text) => edit::insert(model, &text),
        Command::Newline => edit::insert(model, "\n"),
        Command::Tab => {
            let spaces = " ".repeat(model.options().tab_spaces);
            edit::insert(model, &spaces)
        }
        Command::DeleteRange { start, end } => edit::delete_range(model, start, end),
        Command::Backspace { word } => edit::backspace(model, word),
        Command::DeleteForward { word } => edit::delete_forward(model, word),
        Command::Move { motion, mods } => motion::handle_motion(model, motion, mods),
        Command::SelectAll => {
            model.state_mut().select_all();
            DispatchResult::dirty()
        }
        Command::Copy => clipboard::copy(model, clipboard),
        Command::Cut => clipboard::cut(model, clipboard),
        Command::Paste => clipboard::paste(model, clipboard),
        Command::Undo => undo::handle_undo(model),
        Command::Redo => undo::handle_redo(model),
        Command::MousePress {
            x,
            y,
            time_ms,
            mods,
        } => mouse::press(model, x, y, time_ms, mods),
        Command::MouseDrag { x, y } => mouse::drag(model, x, y),
        Command::MouseRelease => mouse::release(model),
        Command::Wheel { delta } => mouse::wheel(model, delta),
        Command::PageUp => mouse::page(model, false),
        Command::PageDown => mouse::page(model, true),
        Command::Escape => defocus(model, false),
        Command::Blur => defocus(model, true),
        Command::Focus => {
            let changed = !model.focused;
            model.focused = true;
            DispatchResult::from_flag(changed)
        }
    };

    result.text_changed = model.state().buffer().revision() != revision;
    if result.text_changed {
        result.dirty = true;
        model.clamp_scroll();
    }
    trace!(
        target: "actions.dispatch",
        cmd = name,
        dirty = result.dirty,
        text_changed = result.text_changed,
        caret = model.state().caret(),
        "dispatch"
    );
    result
}

fn defocus(model: &mut EditorModel, end_drag: bool) -> DispatchResult {
    let had_selection = model.state().has_selection();
    model.state_mut().collapse_selection();
    if end_drag {
        model.pointer.release();
    }
    let was_focused = model.focused;
    model.focused = false;
    DispatchResult::from_flag(had_selection || was_focused)
}

/// Scroll the caret into view after a caret-affecting command.
pub(crate) fn reveal_caret(model: &mut EditorModel) -> DispatchResult {
    model.ensure_caret_visible();
    DispatchResult::dirty()
}
