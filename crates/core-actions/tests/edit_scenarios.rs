mod common;

use common::Harness;
use core_actions::{Command, MemoryClipboard, Modifiers, Motion};

const NONE: Modifiers = Modifiers::empty();

#[test]
fn ctrl_backspace_removes_trailing_space_and_word() {
    let mut h = Harness::new("foo bar ");
    h.caret_to(8);
    let r = h.run(Command::Backspace { word: true });
    assert!(r.text_changed);
    assert_eq!(h.text(), "foo ");
    assert_eq!(h.caret(), 4);
}

#[test]
fn ctrl_delete_removes_space_and_next_word() {
    let mut h = Harness::new("foo bar baz");
    h.caret_to(3);
    h.run(Command::DeleteForward { word: true });
    assert_eq!(h.text(), "foo baz");
    assert_eq!(h.caret(), 3);
}

#[test]
fn backspace_and_delete_at_edges_are_noops() {
    let mut h = Harness::new("ab");
    let r = h.run(Command::Backspace { word: false });
    assert!(!r.dirty && !r.text_changed);
    h.caret_to(2);
    let r = h.run(Command::DeleteForward { word: false });
    assert!(!r.text_changed);
    assert_eq!(h.model.state().undo_engine().undo_depth(), 1);
}

#[test]
fn typing_replaces_selection() {
    let mut h = Harness::new("hello world");
    h.caret_to(6);
    h.mv(Motion::End, Modifiers::SHIFT);
    assert_eq!(h.selection(), (6, 11));
    h.run(Command::InsertText("there".into()));
    assert_eq!(h.text(), "hello there");
    assert_eq!(h.caret(), 11);
    assert_eq!(h.selection(), (11, 11));
}

#[test]
fn delete_range_is_clamped_and_ordered() {
    let mut h = Harness::new("abcdef");
    h.run(Command::DeleteRange { start: 99, end: 3 });
    assert_eq!(h.text(), "abc");
    assert_eq!(h.caret(), 3);
    let r = h.run(Command::DeleteRange { start: 1, end: 1 });
    assert!(!r.text_changed);
}

#[test]
fn shift_motion_grows_and_shrinks_from_anchor() {
    let mut h = Harness::new("one two three");
    h.caret_to(4);
    h.mv(Motion::Right, Modifiers::SHIFT | Modifiers::CTRL);
    assert_eq!(h.selection(), (4, 7));
    h.mv(Motion::Left, Modifiers::SHIFT);
    assert_eq!(h.selection(), (4, 6));
    h.mv(Motion::Home, Modifiers::SHIFT);
    assert_eq!(h.selection(), (0, 4));
    assert_eq!(h.model.state().anchor(), Some(4));
    h.mv(Motion::Right, NONE);
    assert_eq!(h.caret(), 1);
    assert_eq!(h.selection(), (1, 1));
    assert_eq!(h.model.state().anchor(), None);
}

#[test]
fn home_end_are_logical_ctrl_is_buffer() {
    // Logical line 0 wraps into two rows at 120px.
    let mut h = Harness::new("hello world foobar\nnext");
    h.caret_to(15);
    h.mv(Motion::Home, NONE);
    assert_eq!(h.caret(), 0);
    h.mv(Motion::End, NONE);
    assert_eq!(h.caret(), 18);
    h.mv(Motion::End, Modifiers::CTRL);
    assert_eq!(h.caret(), 23);
    h.mv(Motion::Home, Modifiers::CTRL);
    assert_eq!(h.caret(), 0);
}

#[test]
fn up_down_step_through_wrapped_rows() {
    let mut h = Harness::new("hello world foobar\nxy");
    // Row 0 "hello world ", row 1 "foobar", row 2 "xy".
    h.caret_to(2);
    h.mv(Motion::Down, NONE);
    assert_eq!(h.caret(), 14);
    h.mv(Motion::Down, NONE);
    assert_eq!(h.caret(), 21);
    h.mv(Motion::Down, NONE);
    assert_eq!(h.caret(), 21);
    h.mv(Motion::Up, NONE);
    assert_eq!(h.caret(), 14);
    h.mv(Motion::Up, Modifiers::SHIFT);
    assert_eq!(h.caret(), 2);
    assert_eq!(h.selection(), (2, 14));
}

#[test]
fn ctrl_arrows_cross_logical_lines() {
    let mut h = Harness::new("ab\ncd");
    h.caret_to(2);
    h.mv(Motion::Right, Modifiers::CTRL);
    assert_eq!(h.caret(), 3);
    h.mv(Motion::Left, Modifiers::CTRL);
    assert_eq!(h.caret(), 2);
}

#[test]
fn undo_redo_through_dispatch() {
    let mut h = Harness::new("");
    h.run(Command::InsertText("a".into()));
    h.run(Command::InsertText("b".into()));
    assert_eq!(h.model.state().undo_engine().undo_depth(), 3);
    let r = h.run(Command::Undo);
    assert!(r.text_changed);
    assert_eq!(h.text(), "a");
    h.run(Command::Undo);
    assert_eq!(h.text(), "");
    assert_eq!(h.run(Command::Undo), core_actions::DispatchResult::clean());
    h.run(Command::Redo);
    h.run(Command::Redo);
    assert_eq!(h.text(), "ab");
    assert_eq!(h.caret(), 2);
}

#[test]
fn copy_cut_paste_round_trip() {
    let mut h = Harness::new("alpha beta");
    h.run(Command::SelectAll);
    h.run(Command::Copy);
    assert_eq!(h.clipboard.contents(), "alpha beta");
    assert_eq!(h.text(), "alpha beta");

    h.model.state_mut().select_range(5, 10);
    let r = h.run(Command::Cut);
    assert!(r.text_changed);
    assert_eq!(h.text(), "alpha");
    assert_eq!(h.clipboard.contents(), " beta");

    h.caret_to(0);
    h.run(Command::Paste);
    assert_eq!(h.text(), " betaalpha");
    assert_eq!(h.caret(), 5);
}

#[test]
fn copy_without_selection_keeps_clipboard() {
    let mut h = Harness::new("abc");
    h.clipboard = MemoryClipboard::with_text("keep");
    h.run(Command::Copy);
    h.run(Command::Cut);
    assert_eq!(h.clipboard.contents(), "keep");
    assert_eq!(h.text(), "abc");
}

#[test]
fn paste_normalizes_line_endings_and_ignores_empty() {
    let mut h = Harness::new("");
    let r = h.run(Command::Paste);
    assert!(!r.text_changed);
    h.clipboard = MemoryClipboard::with_text("a\r\nb\rc");
    h.run(Command::Paste);
    assert_eq!(h.text(), "a\nb\nc");
    assert_eq!(h.model.state().buffer().line_count(), 3);
}
