//! Undo / redo dispatch over the snapshot history in `EditorState`.

use super::{DispatchResult, reveal_caret};
use core_model::EditorModel;

pub(crate) fn handle_undo(model: &mut EditorModel) -> DispatchResult {
    if model.state_mut().undo() {
        let undo_depth = model.state().undo_engine().undo_depth();
        tracing::trace!(target: "actions.dispatch", op = "undo", undo_depth, "undo");
        reveal_caret(model)
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn handle_redo(model: &mut EditorModel) -> DispatchResult {
    if model.state_mut().redo() {
        let redo_depth = model.state().undo_engine().redo_depth();
        tracing::trace!(target: "actions.dispatch", op = "redo", redo_depth, "redo");
        reveal_caret(model)
    } else {
        DispatchResult::clean()
    }
}
