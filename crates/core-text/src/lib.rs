//! Rope-backed text buffer with a logical line index.
//!
//! Offsets everywhere in this crate are *char* offsets (Unicode scalar
//! values), which is also the unit `ropey` indexes by. A logical line is the
//! run of characters between two newlines, exclusive of the terminating
//! `'\n'`; visual wrapping lives in `core-model`.
//!
//! Mutation primitives (`insert`, `delete`) do not clamp. Out-of-range offsets
//! are a caller bug and trip a debug assertion; clamping is the job of the
//! controller layer (`core-state`).

pub use ropey::Rope;

pub mod line_ending;
pub mod motion;
pub mod word;

/// Start offsets of every logical line.
///
/// Invariants: `starts[0] == 0`, strictly increasing, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self { starts: vec![0] }
    }
}

impl LineIndex {
    /// Full O(n) rebuild: one entry at 0 plus one after every newline.
    pub fn build(rope: &Rope) -> Self {
        let mut starts = Vec::with_capacity(rope.len_lines());
        starts.push(0);
        for (i, ch) in rope.chars().enumerate() {
            if ch == '\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Start offset of `line`. Caller guarantees `line < line_count()`.
    pub fn line_start(&self, line: usize) -> usize {
        self.starts[line]
    }

    /// End offset (exclusive, newline not included) of `line` in a buffer of `len` chars.
    pub fn line_end(&self, line: usize, len: usize) -> usize {
        match self.starts.get(line + 1) {
            Some(next) => next - 1,
            None => len,
        }
    }

    /// Index of the line containing `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        // First start strictly greater than offset, minus one.
        self.starts.partition_point(|&s| s <= offset).saturating_sub(1)
    }
}

/// Mutable character sequence plus its derived logical line index.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
    lines: LineIndex,
    revision: u64,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(content: &str) -> Self {
        let rope = Rope::from_str(content);
        let lines = LineIndex::build(&rope);
        Self {
            rope,
            lines,
            revision: 0,
        }
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Monotonic mutation counter; bumps on every insert/delete/replace.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    /// Splice `text` in at `at`. Requires `at <= len()`.
    pub fn insert(&mut self, at: usize, text: &str) {
        debug_assert!(at <= self.len(), "insert at {at} past end {}", self.len());
        if text.is_empty() {
            return;
        }
        self.rope.insert(at, text);
        self.touch();
    }

    /// Remove `[a, b)`. Requires `a <= b <= len()`; no-op when `a == b`.
    pub fn delete(&mut self, a: usize, b: usize) {
        debug_assert!(a <= b && b <= self.len(), "delete {a}..{b} out of range");
        if a == b {
            return;
        }
        self.rope.remove(a..b);
        self.touch();
    }

    /// Pure read of `[a, b)`; empty when `b <= a`.
    pub fn substring(&self, a: usize, b: usize) -> String {
        if b <= a {
            return String::new();
        }
        debug_assert!(b <= self.len(), "substring {a}..{b} out of range");
        self.rope.slice(a..b).to_string()
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, content: &str) {
        self.rope = Rope::from_str(content);
        self.touch();
    }

    /// Cheap (shared-node) copy of the content for history snapshots.
    pub fn snapshot(&self) -> Rope {
        self.rope.clone()
    }

    pub fn restore(&mut self, rope: Rope) {
        self.rope = rope;
        self.touch();
    }

    /// Conservatively rebuilt after every mutation.
    pub fn rebuild_line_index(&mut self) {
        self.lines = LineIndex::build(&self.rope);
    }

    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.lines.line_start(line)
    }

    pub fn line_end(&self, line: usize) -> usize {
        self.lines.line_end(line, self.len())
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line_end(line) - self.line_start(line)
    }

    /// Content of `line` without its newline.
    pub fn line_text(&self, line: usize) -> String {
        self.substring(self.line_start(line), self.line_end(line))
    }

    /// Content of `line` as chars, for column-indexed scans.
    pub fn line_chars(&self, line: usize) -> Vec<char> {
        self.rope
            .slice(self.line_start(line)..self.line_end(line))
            .chars()
            .collect()
    }

    fn touch(&mut self) {
        self.rebuild_line_index();
        self.revision += 1;
    }
}
