use core_text::Rope;
use std::collections::VecDeque;
use tracing::trace;

/// Default maximum number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 200;

/// Full-state snapshot for undo/redo.
///
/// `text` is a rope clone, so taking a snapshot shares nodes with the live
/// buffer instead of copying the whole string.
#[derive(Clone, Debug)]
pub struct EditSnapshot {
    pub text: Rope,
    pub caret: usize,
    pub selection_a: usize,
    pub selection_b: usize,
}

impl EditSnapshot {
    /// Coalescing predicate: identical text and identical caret.
    fn same_point(&self, other: &EditSnapshot) -> bool {
        self.caret == other.caret && self.text == other.text
    }
}

/// Bounded snapshot history.
///
/// The newest undo entry always describes the committed current state:
/// edits call `begin_edit` before mutating and `commit` after. `undo` pops
/// that entry and hands back the one below it, so the oldest remaining entry
/// (the baseline) is never popped.
pub struct UndoEngine {
    undo_stack: VecDeque<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
    capacity: usize,
    snapshots_skipped: u64,
}

impl UndoEngine {
    pub fn new(baseline: EditSnapshot) -> Self {
        Self::with_capacity(baseline, UNDO_HISTORY_MAX)
    }

    pub fn with_capacity(baseline: EditSnapshot, capacity: usize) -> Self {
        let mut undo_stack = VecDeque::new();
        undo_stack.push_back(baseline);
        Self {
            undo_stack,
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
            snapshots_skipped: 0,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn snapshots_skipped(&self) -> u64 {
        self.snapshots_skipped
    }
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Push unless the newest entry has the same text and caret. Returns whether it was pushed.
    pub fn push_snapshot(&mut self, snap: EditSnapshot) -> bool {
        if let Some(last) = self.undo_stack.back()
            && last.same_point(&snap)
        {
            self.snapshots_skipped += 1;
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), caret = snap.caret, "snapshot_dedupe_skip");
            return false;
        }
        let caret = snap.caret;
        self.undo_stack.push_back(snap);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), caret, "push_snapshot");
        if self.undo_stack.len() > self.capacity {
            let _ = self.undo_stack.pop_front();
            trace!(target: "state.undo", capacity = self.capacity, "undo_stack_trimmed");
        }
        true
    }

    /// Bring the newest entry up to date with `current`.
    ///
    /// When only the caret or selection moved since that entry, they are
    /// rewritten in place so caret motion never costs an undo step.
    fn settle_top(&mut self, current: EditSnapshot) {
        if let Some(last) = self.undo_stack.back_mut()
            && last.text == current.text
        {
            let same_selection = last.selection_a == current.selection_a
                && last.selection_b == current.selection_b;
            if last.same_point(&current) && same_selection {
                self.snapshots_skipped += 1;
            } else {
                last.caret = current.caret;
                last.selection_a = current.selection_a;
                last.selection_b = current.selection_b;
                trace!(target: "state.undo", caret = current.caret, "top_caret_updated");
            }
            return;
        }
        self.push_snapshot(current);
    }

    /// Record the pre-edit state and drop the redo branch.
    pub fn begin_edit(&mut self, current: EditSnapshot) {
        self.settle_top(current);
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Record the post-edit state.
    pub fn commit(&mut self, current: EditSnapshot) {
        self.push_snapshot(current);
    }

    /// Returns the state to restore, or `None` at the baseline.
    pub fn undo(&mut self, current: EditSnapshot) -> Option<EditSnapshot> {
        if self.undo_stack.len() <= 1 {
            trace!(target: "state.undo", "undo_at_baseline");
            return None;
        }
        self.redo_stack.push(current);
        let _ = self.undo_stack.pop_back();
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        self.undo_stack.back().cloned()
    }

    /// Returns the state to restore, or `None` when nothing was undone.
    pub fn redo(&mut self, current: EditSnapshot) -> Option<EditSnapshot> {
        let next = self.redo_stack.pop()?;
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), undo_depth = self.undo_stack.len(), "redo_pop");
        self.settle_top(current);
        self.push_snapshot(next.clone());
        Some(next)
    }

    /// Drop all history and start again from `baseline`.
    pub fn reset(&mut self, baseline: EditSnapshot) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.undo_stack.push_back(baseline);
        trace!(target: "state.undo", "history_reset");
    }
}
