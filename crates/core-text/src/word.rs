//! Word classification shared by wrapping, word navigation and double-click selection.
//!
//! A word character is alphanumeric, `_`, or any alphabetic code point. Every
//! other character (whitespace, punctuation, symbols) is a separator. The
//! scans below operate on one logical line given as a char slice and a column.

/// Alphanumeric, underscore, or any alphabetic code point.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Split a line into maximal runs of word vs non-word characters.
///
/// Separators are kept as their own tokens so that concatenating the result
/// reproduces `line` exactly.
pub fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, ch) in line.char_indices() {
        let w = is_word_char(ch);
        match current {
            Some(prev) if prev == w => {}
            Some(_) => {
                tokens.push(&line[start..idx]);
                start = idx;
                current = Some(w);
            }
            None => current = Some(w),
        }
    }
    if start < line.len() {
        tokens.push(&line[start..]);
    }
    tokens
}

/// Column reached by skipping whitespace, then word characters, leftwards from `col`.
pub fn scan_word_back(line: &[char], col: usize) -> usize {
    let mut pos = col.min(line.len());
    while pos > 0 && is_space(line[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(line[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Column reached by skipping whitespace, then word characters, rightwards from `col`.
pub fn scan_word_forward(line: &[char], col: usize) -> usize {
    let n = line.len();
    let mut pos = col.min(n);
    while pos < n && is_space(line[pos]) {
        pos += 1;
    }
    while pos < n && is_word_char(line[pos]) {
        pos += 1;
    }
    pos
}

/// Word span `[start, end)` around `col`, expanding over word characters in both directions.
///
/// A column at or past the end of a non-empty line is treated as the last
/// character. An empty line yields `(0, 0)`.
pub fn word_bounds(line: &[char], col: usize) -> (usize, usize) {
    if line.is_empty() {
        return (0, 0);
    }
    let pos = col.min(line.len() - 1);
    let mut start = pos;
    while start > 0 && is_word_char(line[start - 1]) {
        start -= 1;
    }
    let mut end = pos;
    while end < line.len() && is_word_char(line[end]) {
        end += 1;
    }
    (start, end)
}
