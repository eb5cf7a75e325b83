//! Render sinks.

use crate::{CaretBlink, Frame, build_frame};
use core_model::EditorModel;

/// Consumer of assembled frames. Hosts implement this over their drawing API.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Build a frame for the model's current state and hand it to `sink`.
pub fn render(model: &mut EditorModel, blink: &CaretBlink, sink: &mut dyn RenderSink) {
    let frame = build_frame(model, blink.is_visible());
    sink.present(&frame);
}

/// Plain-text sink: one line per visible row, gutter number then `|` then text.
/// Trailing line terminators are dropped.
#[derive(Debug, Default)]
pub struct TextSink {
    pub lines: Vec<String>,
    pub caret: Option<(i32, i32)>,
    pub selection_rects: usize,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        let mut s = self.lines.join("\n");
        s.push('\n');
        s
    }
}

impl RenderSink for TextSink {
    fn present(&mut self, frame: &Frame) {
        self.lines = frame
            .rows
            .iter()
            .map(|row| {
                let gutter = row
                    .gutter_number
                    .map(|n| n.to_string())
                    .unwrap_or_default();
                let text = row.text.trim_end_matches(['\n', '\r']);
                format!("{gutter:>4}|{text}")
            })
            .collect();
        self.caret = frame.caret.map(|r| (r.x, r.y));
        self.selection_rects = frame.selection.len();
    }
}
