#![allow(dead_code)]

use core_actions::{Command, DispatchResult, MemoryClipboard, Modifiers, Motion, dispatch};
use core_model::{EditorModel, LayoutOptions, ModelOptions, View};
use core_text::Buffer;

/// 10px per char, 16px glyphs + 4px spacing = 20px rows.
pub fn stub(s: &str) -> u32 {
    s.chars().count() as u32 * 10
}

/// Edit box with no gutter/padding: content area is `width` x `height`.
pub fn model_sized(text: &str, width: u32, height: u32) -> EditorModel {
    let opts = ModelOptions {
        layout: LayoutOptions {
            line_spacing: 4,
            min_content_width: 10,
        },
        ..ModelOptions::default()
    };
    EditorModel::new(Buffer::from_text(text), View::new(width, height, 0, 0), opts)
        .with_measure(stub)
}

pub fn model(text: &str) -> EditorModel {
    model_sized(text, 120, 200)
}

pub struct Harness {
    pub model: EditorModel,
    pub clipboard: MemoryClipboard,
}

impl Harness {
    pub fn new(text: &str) -> Self {
        Self {
            model: model(text),
            clipboard: MemoryClipboard::new(),
        }
    }

    pub fn with_model(model: EditorModel) -> Self {
        Self {
            model,
            clipboard: MemoryClipboard::new(),
        }
    }

    pub fn run(&mut self, cmd: Command) -> DispatchResult {
        dispatch(cmd, &mut self.model, &mut self.clipboard)
    }

    pub fn mv(&mut self, motion: Motion, mods: Modifiers) -> DispatchResult {
        self.run(Command::Move { motion, mods })
    }

    pub fn click(&mut self, x: i32, y: i32, time_ms: u64) -> DispatchResult {
        self.run(Command::MousePress {
            x,
            y,
            time_ms,
            mods: Modifiers::empty(),
        })
    }

    pub fn caret_to(&mut self, offset: usize) {
        self.model.state_mut().move_caret(offset, false);
    }

    pub fn text(&self) -> String {
        self.model.state().text()
    }

    pub fn caret(&self) -> usize {
        self.model.state().caret()
    }

    pub fn selection(&self) -> (usize, usize) {
        self.model.state().selection().range()
    }
}
