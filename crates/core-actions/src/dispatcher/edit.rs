//! Text mutation commands.
//!
//! Each call goes through one `EditorState` operation, which records the
//! history snapshot pair around the mutation. A command that changes nothing
//! (backspace at offset 0, empty range) leaves history untouched.

use super::{DispatchResult, reveal_caret};
use core_model::EditorModel;
use tracing::trace;

pub(crate) fn insert(model: &mut EditorModel, text: &str) -> DispatchResult {
    if text.is_empty() && !model.state().has_selection() {
        return DispatchResult::clean();
    }
    model.state_mut().insert_text(text);
    trace!(target: "actions.dispatch", op = "insert", chars = text.chars().count(), caret = model.state().caret(), "edit");
    reveal_caret(model)
}

pub(crate) fn delete_range(model: &mut EditorModel, start: usize, end: usize) -> DispatchResult {
    if !model.state_mut().delete_range(start, end) {
        return DispatchResult::clean();
    }
    trace!(target: "actions.dispatch", op = "delete_range", start, end, "edit");
    reveal_caret(model)
}

pub(crate) fn backspace(model: &mut EditorModel, word: bool) -> DispatchResult {
    let state = model.state_mut();
    let changed = if word {
        state.delete_word_back()
    } else {
        state.backspace()
    };
    trace!(target: "actions.dispatch", op = "backspace", word, changed, "edit");
    if changed {
        reveal_caret(model)
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn delete_forward(model: &mut EditorModel, word: bool) -> DispatchResult {
    let state = model.state_mut();
    let changed = if word {
        state.delete_word_forward()
    } else {
        state.delete_forward()
    };
    trace!(target: "actions.dispatch", op = "delete_forward", word, changed, "edit");
    if changed {
        reveal_caret(model)
    } else {
        DispatchResult::clean()
    }
}
