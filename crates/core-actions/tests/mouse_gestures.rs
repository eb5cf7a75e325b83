mod common;

use common::{Harness, model_sized};
use core_actions::{Command, Modifiers};

// Rows are 20px tall and glyphs 10px wide; the text area starts at (0, 0).

#[test]
fn double_click_selects_word() {
    let mut h = Harness::new("alpha beta gamma");
    // Offset 7 sits at x = 70 on row 0.
    h.click(70, 5, 1000);
    assert_eq!(h.caret(), 7);
    h.click(70, 5, 1200);
    assert_eq!(h.selection(), (6, 10));
    assert_eq!(h.model.state().selected_text().as_deref(), Some("beta"));
}

#[test]
fn triple_click_selects_logical_line() {
    let mut h = Harness::new("first line here\nsecond");
    h.click(30, 5, 0);
    h.click(30, 5, 100);
    h.click(30, 5, 200);
    assert_eq!(h.selection(), (0, 15));
    // Fourth click still selects the line.
    h.click(30, 5, 300);
    assert_eq!(h.selection(), (0, 15));
}

#[test]
fn slow_second_click_starts_over() {
    let mut h = Harness::new("alpha beta gamma");
    h.click(70, 5, 1000);
    h.click(70, 5, 1400);
    assert_eq!(h.selection(), (7, 7));
    assert_eq!(h.model.pointer.click_count, 1);
}

#[test]
fn drag_extends_from_press_point() {
    let mut h = Harness::new("alpha beta gamma");
    h.click(20, 5, 0);
    h.run(Command::MouseDrag { x: 80, y: 5 });
    assert_eq!(h.selection(), (2, 8));
    assert_eq!(h.caret(), 8);
    // Dragging back past the anchor flips the range.
    h.run(Command::MouseDrag { x: 0, y: 5 });
    assert_eq!(h.selection(), (0, 2));
    h.run(Command::MouseRelease);
    let r = h.run(Command::MouseDrag { x: 100, y: 5 });
    assert!(!r.dirty);
    assert_eq!(h.selection(), (0, 2));
}

#[test]
fn drag_rounds_to_nearest_row() {
    // Two rows: "hello world " and "foobar".
    let mut h = Harness::new("hello world foobar");
    h.click(0, 0, 0);
    // y = 9 is still closer to row 0.
    h.run(Command::MouseDrag { x: 30, y: 9 });
    assert_eq!(h.caret(), 3);
    // y = 11 crosses the row midline.
    h.run(Command::MouseDrag { x: 30, y: 11 });
    assert_eq!(h.caret(), 15);
}

#[test]
fn shift_click_extends_existing_selection() {
    let mut h = Harness::new("alpha beta gamma");
    h.click(20, 5, 0);
    h.run(Command::MouseRelease);
    h.run(Command::MousePress {
        x: 90,
        y: 5,
        time_ms: 5000,
        mods: Modifiers::SHIFT,
    });
    assert_eq!(h.selection(), (2, 9));
}

#[test]
fn click_below_text_lands_on_last_row() {
    let mut h = Harness::new("ab\ncd");
    h.click(500, 190, 0);
    assert_eq!(h.caret(), 5);
}

#[test]
fn wheel_and_pages_scroll_and_clamp() {
    let text = (0..20).map(|i| format!("{i}")).collect::<Vec<_>>().join("\n");
    // 20 rows of 20px = 400px of text in a 100px tall box.
    let mut h = Harness::with_model(model_sized(&text, 120, 100));
    let r = h.run(Command::Wheel { delta: 1 });
    assert!(!r.dirty);
    h.run(Command::Wheel { delta: -1 });
    // Three rows per notch.
    assert_eq!(h.model.view.scroll_y, 60);
    h.run(Command::Wheel { delta: -100 });
    assert_eq!(h.model.view.scroll_y, 300);

    h.model.view.scroll_y = 0;
    h.run(Command::PageDown);
    assert_eq!(h.model.view.scroll_y, 100);
    // Caret moved five rows down along with the page.
    assert_eq!(h.model.state().buffer().lines().line_of(h.caret()), 5);
    h.run(Command::PageUp);
    assert_eq!(h.caret(), 0);
    assert_eq!(h.model.view.scroll_y, 0);
}

#[test]
fn caret_motion_keeps_caret_visible() {
    let text = (0..20).map(|i| format!("{i}")).collect::<Vec<_>>().join("\n");
    let mut h = Harness::with_model(model_sized(&text, 120, 100));
    h.run(Command::Move {
        motion: core_actions::Motion::End,
        mods: Modifiers::CTRL,
    });
    // Row 19 at y = 380; 100px visible -> scroll 300.
    assert_eq!(h.model.view.scroll_y, 300);
}

#[test]
fn blur_ends_drag_and_focus_restores() {
    let mut h = Harness::new("alpha");
    h.click(10, 5, 0);
    assert!(h.model.pointer.is_dragging());
    h.run(Command::Blur);
    assert!(!h.model.pointer.is_dragging());
    assert!(!h.model.focused);
    assert!(h.run(Command::Focus).dirty);
    assert!(h.model.focused);
}
