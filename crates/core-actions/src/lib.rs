//! Controller command API for the edit box.
//!
//! Hosts decode their own input events (keys, mouse, wheel) into `Command`
//! values and hand them to `dispatch` together with the `EditorModel` and a
//! `Clipboard` capability. There is no widget hierarchy and no event
//! decoding in here; any front end that can build a `Command` can drive the
//! engine.

use bitflags::bitflags;

pub mod clipboard;
pub mod dispatcher;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use dispatcher::{DispatchResult, dispatch};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 0b0000_0001;
        const SHIFT = 0b0000_0010;
    }
}

impl Modifiers {
    pub fn ctrl(self) -> bool {
        self.contains(Modifiers::CTRL)
    }

    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert at the caret, replacing the selection.
    InsertText(String),
    Newline,
    /// Insert `tab_spaces` spaces.
    Tab,
    DeleteRange {
        start: usize,
        end: usize,
    },
    Backspace {
        word: bool,
    },
    DeleteForward {
        word: bool,
    },
    Move {
        motion: Motion,
        mods: Modifiers,
    },
    SelectAll,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
    /// Pixel coordinates relative to the edit box's top-left corner.
    MousePress {
        x: i32,
        y: i32,
        time_ms: u64,
        mods: Modifiers,
    },
    MouseDrag {
        x: i32,
        y: i32,
    },
    MouseRelease,
    /// Positive scrolls toward the start.
    Wheel {
        delta: i32,
    },
    PageUp,
    PageDown,
    /// Collapse the selection and drop focus.
    Escape,
    /// Focus lost: like `Escape`, and any drag ends.
    Blur,
    Focus,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertText(_) => "insert_text",
            Command::Newline => "newline",
            Command::Tab => "tab",
            Command::DeleteRange { .. } => "delete_range",
            Command::Backspace { .. } => "backspace",
            Command::DeleteForward { .. } => "delete_forward",
            Command::Move { .. } => "move",
            Command::SelectAll => "select_all",
            Command::Copy => "copy",
            Command::Cut => "cut",
            Command::Paste => "paste",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::MousePress { .. } => "mouse_press",
            Command::MouseDrag { .. } => "mouse_drag",
            Command::MouseRelease => "mouse_release",
            Command::Wheel { .. } => "wheel",
            Command::PageUp => "page_up",
            Command::PageDown => "page_down",
            Command::Escape => "escape",
            Command::Blur => "blur",
            Command::Focus => "focus",
        }
    }

    /// Commands that only make sense while the edit box has keyboard focus.
    pub fn needs_focus(&self) -> bool {
        !matches!(
            self,
            Command::MousePress { .. }
                | Command::MouseDrag { .. }
                | Command::MouseRelease
                | Command::Wheel { .. }
                | Command::Focus
                | Command::Blur
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_helpers() {
        let m = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(m.ctrl() && m.shift());
        assert!(!Modifiers::empty().ctrl());
    }

    #[test]
    fn mouse_commands_ignore_focus() {
        assert!(!Command::Wheel { delta: 1 }.needs_focus());
        assert!(Command::Undo.needs_focus());
        assert_eq!(Command::Backspace { word: true }.name(), "backspace");
    }
}
