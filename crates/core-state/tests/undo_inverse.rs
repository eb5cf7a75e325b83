use core_state::EditorState;
use core_text::Buffer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Type(String),
    Backspace,
    DeleteWordBack,
    Move(usize),
    Select(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-c \n]{1,3}".prop_map(Op::Type),
        Just(Op::Backspace),
        Just(Op::DeleteWordBack),
        (0usize..40).prop_map(Op::Move),
        (0usize..40, 0usize..40).prop_map(|(a, b)| Op::Select(a, b)),
    ]
}

/// Apply `op`; returns whether it was an edit that ran.
fn apply(s: &mut EditorState, op: &Op) -> bool {
    match op {
        Op::Type(t) => {
            s.insert_text(t);
            true
        }
        Op::Backspace => s.backspace(),
        Op::DeleteWordBack => s.delete_word_back(),
        Op::Move(to) => {
            s.move_caret(*to, false);
            false
        }
        Op::Select(a, b) => {
            s.select_range(*a, *b);
            false
        }
    }
}

proptest! {
    #[test]
    fn undo_then_redo_is_identity(ops in prop::collection::vec(op_strategy(), 1..20)) {
        let mut s = EditorState::new(Buffer::new());
        for op in &ops {
            apply(&mut s, op);
        }
        let text = s.text();
        let caret = s.caret();
        if s.undo() {
            prop_assert!(s.redo());
            prop_assert_eq!(s.text(), text);
            prop_assert_eq!(s.caret(), caret);
        }
    }

    #[test]
    fn undo_all_reaches_empty_baseline(ops in prop::collection::vec(op_strategy(), 1..20)) {
        let mut s = EditorState::new(Buffer::new());
        for op in &ops {
            apply(&mut s, op);
        }
        let mut guard = 0;
        while s.undo() {
            guard += 1;
            prop_assert!(guard < 200);
        }
        prop_assert_eq!(s.text(), "");
        prop_assert_eq!(s.caret(), 0);
    }

    #[test]
    fn n_undos_reach_start_and_n_redos_return(ops in prop::collection::vec(op_strategy(), 1..20)) {
        let mut s = EditorState::new(Buffer::new());
        let mut edits = 0usize;
        for op in &ops {
            if apply(&mut s, op) {
                edits += 1;
            }
        }
        let text = s.text();
        let caret = s.caret();
        for _ in 0..edits {
            s.undo();
        }
        prop_assert_eq!(s.text(), "");
        prop_assert_eq!(s.caret(), 0);
        for _ in 0..edits {
            s.redo();
        }
        prop_assert_eq!(s.text(), text);
        prop_assert_eq!(s.caret(), caret);
    }

    #[test]
    fn caret_stays_in_bounds(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut s = EditorState::new(Buffer::new());
        for op in &ops {
            apply(&mut s, op);
            let len = s.buffer().len();
            prop_assert!(s.caret() <= len);
            let (a, b) = s.selection().range();
            prop_assert!(a <= b && b <= len);
        }
    }
}

#[test]
fn deleting_selection_twice_changes_nothing_the_second_time() {
    let mut s = EditorState::new(Buffer::from_text("alpha beta"));
    s.select_range(2, 7);
    assert!(s.delete_selection());
    let after = s.text();
    let depth = s.undo_engine().undo_depth();
    assert!(!s.delete_selection());
    assert_eq!(s.text(), after);
    assert_eq!(s.undo_engine().undo_depth(), depth);
}
