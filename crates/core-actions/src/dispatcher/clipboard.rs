//! Copy / cut / paste. The only code that talks to the `Clipboard` capability.

use super::{DispatchResult, reveal_caret};
use crate::Clipboard;
use core_model::EditorModel;
use core_text::line_ending::normalize_line_endings;
use tracing::trace;

pub(crate) fn copy(model: &mut EditorModel, clipboard: &mut dyn Clipboard) -> DispatchResult {
    if let Some(text) = model.state().selected_text() {
        trace!(target: "actions.dispatch", op = "copy", chars = text.chars().count(), "clipboard");
        clipboard.set_text(&text);
    }
    DispatchResult::clean()
}

pub(crate) fn cut(model: &mut EditorModel, clipboard: &mut dyn Clipboard) -> DispatchResult {
    let Some(text) = model.state().selected_text() else {
        return DispatchResult::clean();
    };
    trace!(target: "actions.dispatch", op = "cut", chars = text.chars().count(), "clipboard");
    clipboard.set_text(&text);
    model.state_mut().delete_selection();
    reveal_caret(model)
}

/// Insert clipboard text with line endings normalized to `\n`. Empty clipboard is a no-op.
pub(crate) fn paste(model: &mut EditorModel, clipboard: &mut dyn Clipboard) -> DispatchResult {
    let raw = clipboard.get_text();
    if raw.is_empty() {
        return DispatchResult::clean();
    }
    let text = normalize_line_endings(&raw).normalized;
    trace!(target: "actions.dispatch", op = "paste", chars = text.chars().count(), "clipboard");
    model.state_mut().insert_text(&text);
    reveal_caret(model)
}
