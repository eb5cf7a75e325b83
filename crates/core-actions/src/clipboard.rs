//! Clipboard capability. Only copy, cut and paste touch it.

pub trait Clipboard {
    /// Current clipboard text; empty when there is none.
    fn get_text(&mut self) -> String;
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard for hosts without an OS clipboard, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> String {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.contents.clear();
        self.contents.push_str(text);
    }
}
