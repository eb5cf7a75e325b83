//! Editor state for one editable field: buffer, caret, selection, anchor and history.
//!
//! Every public operation here clamps its offsets to `[0, len]` before
//! touching the buffer. Stale offsets are routine (a pixel-to-offset lookup
//! computed against a layout that predates the last edit), so they are
//! corrected silently rather than rejected. The `core_text::Buffer`
//! primitives underneath do *not* clamp.
//!
//! History discipline:
//! - Each mutating operation calls `UndoEngine::begin_edit` with the pre-edit
//!   state, mutates, then `UndoEngine::commit` with the result. Both pushes use
//!   the same coalescing predicate (skip when text and caret equal the newest
//!   snapshot), so a burst of typing yields one entry per keystroke and a caret
//!   move between edits is preserved as its own restorable point.
//! - Undo/redo restore text, caret and both selection ends, and clear the
//!   gesture anchor.

use core_text::{Buffer, motion};
use tracing::trace;

pub mod undo;
pub use undo::{EditSnapshot, UNDO_HISTORY_MAX, UndoEngine};

/// Unordered pair of offsets; the selected range is `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub a: usize,
    pub b: usize,
}

impl Selection {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn collapsed(at: usize) -> Self {
        Self { a: at, b: at }
    }

    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// Ordered `(start, end)`.
    pub fn range(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    pub fn contains(&self, offset: usize) -> bool {
        let (s, e) = self.range();
        offset >= s && offset < e
    }
}

pub struct EditorState {
    buffer: Buffer,
    caret: usize,
    selection: Selection,
    /// Fixed end of an in-progress shift/drag gesture.
    anchor: Option<usize>,
    undo: UndoEngine,
    /// Set by any content change; cleared by the host after it persists the text.
    pub dirty: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Buffer::new())
    }
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self::with_undo_limit(buffer, UNDO_HISTORY_MAX)
    }

    pub fn with_undo_limit(buffer: Buffer, undo_limit: usize) -> Self {
        let baseline = EditSnapshot {
            text: buffer.snapshot(),
            caret: 0,
            selection_a: 0,
            selection_b: 0,
        };
        Self {
            buffer,
            caret: 0,
            selection: Selection::default(),
            anchor: None,
            undo: UndoEngine::with_capacity(baseline, undo_limit),
            dirty: false,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn undo_engine(&self) -> &UndoEngine {
        &self.undo
    }

    pub fn clamp_offset(&self, offset: usize) -> usize {
        offset.min(self.buffer.len())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_text(&self) -> Option<String> {
        let (a, b) = self.clamped_selection();
        (a < b).then(|| self.buffer.substring(a, b))
    }

    /// Replace the content (host load). Caret and selection return to 0 and
    /// the history restarts from the new text.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.caret = 0;
        self.selection = Selection::collapsed(0);
        self.anchor = None;
        self.undo.reset(self.snapshot());
        self.dirty = false;
    }

    /// Insert at the caret, replacing any selection first.
    pub fn insert_text(&mut self, text: &str) {
        self.begin_edit();
        let (a, b) = self.clamped_selection();
        if a != b {
            self.buffer.delete(a, b);
            self.caret = a;
        }
        self.caret = self.clamp_offset(self.caret);
        self.buffer.insert(self.caret, text);
        self.caret += text.chars().count();
        self.collapse_to_caret();
        trace!(target: "state.edit", op = "insert", chars = text.chars().count(), caret = self.caret, "edit");
        self.commit_edit();
    }

    /// Remove `[min(a,b), max(a,b))` (clamped); caret lands on the start.
    /// Returns false (and records nothing) when the range is empty.
    pub fn delete_range(&mut self, a: usize, b: usize) -> bool {
        let (a, b) = (self.clamp_offset(a.min(b)), self.clamp_offset(a.max(b)));
        if a == b {
            return false;
        }
        self.begin_edit();
        self.buffer.delete(a, b);
        self.caret = a;
        self.collapse_to_caret();
        trace!(target: "state.edit", op = "delete", start = a, end = b, "edit");
        self.commit_edit();
        true
    }

    pub fn delete_selection(&mut self) -> bool {
        let (a, b) = self.selection.range();
        self.delete_range(a, b)
    }

    pub fn backspace(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.clamp_offset(self.caret);
        if caret == 0 {
            return false;
        }
        self.delete_range(caret - 1, caret)
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.clamp_offset(self.caret);
        if caret >= self.buffer.len() {
            return false;
        }
        self.delete_range(caret, caret + 1)
    }

    /// Delete back to the previous word boundary (whitespace run, then word run)
    /// within the caret's line. No-op when the scan traverses nothing.
    pub fn delete_word_back(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.clamp_offset(self.caret);
        let target = motion::word_scan_back(&self.buffer, caret);
        self.delete_range(target, caret)
    }

    /// Delete forward to the next word boundary (whitespace run, then word run)
    /// within the caret's line. No-op when the scan traverses nothing.
    pub fn delete_word_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        let caret = self.clamp_offset(self.caret);
        let target = motion::word_scan_forward(&self.buffer, caret);
        self.delete_range(caret, target)
    }

    /// Move the caret to `target`, extending (shift) or collapsing the selection.
    pub fn move_caret(&mut self, target: usize, shift: bool) {
        let target = self.clamp_offset(target);
        if shift {
            let anchor = *self.anchor.get_or_insert(self.clamp_offset(self.caret));
            self.caret = target;
            self.selection = Selection::new(anchor, target);
        } else {
            self.caret = target;
            self.collapse_to_caret();
        }
    }

    /// Select `[anchor, caret)` in gesture order with the caret at `caret`.
    pub fn select_range(&mut self, anchor: usize, caret: usize) {
        let (anchor, caret) = (self.clamp_offset(anchor), self.clamp_offset(caret));
        self.anchor = Some(anchor);
        self.caret = caret;
        self.selection = Selection::new(anchor, caret);
    }

    pub fn select_all(&mut self) {
        self.select_range(0, self.buffer.len());
    }

    /// Drop the selection and anchor, keeping the caret.
    pub fn collapse_selection(&mut self) {
        self.caret = self.clamp_offset(self.caret);
        self.collapse_to_caret();
    }

    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.undo.undo(current) {
            Some(snap) => {
                self.restore(snap);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.undo.redo(current) {
            Some(snap) => {
                self.restore(snap);
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            text: self.buffer.snapshot(),
            caret: self.caret,
            selection_a: self.selection.a,
            selection_b: self.selection.b,
        }
    }

    fn restore(&mut self, snap: EditSnapshot) {
        self.buffer.restore(snap.text);
        let len = self.buffer.len();
        self.caret = snap.caret.min(len);
        self.selection = Selection::new(snap.selection_a.min(len), snap.selection_b.min(len));
        self.anchor = None;
        self.dirty = true;
    }

    fn begin_edit(&mut self) {
        let snap = self.snapshot();
        self.undo.begin_edit(snap);
    }

    fn commit_edit(&mut self) {
        self.dirty = true;
        let snap = self.snapshot();
        self.undo.commit(snap);
    }

    fn collapse_to_caret(&mut self) {
        self.anchor = None;
        self.selection = Selection::collapsed(self.caret);
    }

    fn clamped_selection(&self) -> (usize, usize) {
        let (a, b) = self.selection.range();
        (self.clamp_offset(a), self.clamp_offset(b))
    }
}
