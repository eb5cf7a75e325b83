//! Greedy word wrap of logical lines against a pixel width.
//!
//! Each logical line is split into word / separator tokens
//! (`core_text::word::split_tokens`) and tokens are packed onto a row while
//! the measured row stays `<=` the content width. A token that does not fit
//! on an otherwise empty row is cut at the longest fitting character prefix;
//! when not even one character fits, one character is forced through so
//! every step consumes input. Separators are kept, so a row may end in
//! whitespace and the rows of a logical line concatenate back to it exactly.

use crate::measure::TextMeasure;
use core_text::{Buffer, word::split_tokens};

/// One visual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub logical_line: usize,
    /// Column of the first character within the logical line.
    pub start_char: usize,
    pub text: String,
}

impl WrappedLine {
    pub fn new(logical_line: usize, start_char: usize, text: impl Into<String>) -> Self {
        Self {
            logical_line,
            start_char,
            text: text.into(),
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Column one past the last character.
    pub fn end_char(&self) -> usize {
        self.start_char + self.char_len()
    }
}

/// Byte slice holding the first `n` chars of `s` (all of `s` when shorter).
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Wrap every logical line of `buffer`.
///
/// `content_width` is raised to `min_width` first. Without a measurer the
/// result is a single row holding the whole buffer.
pub fn wrap_buffer(
    buffer: &Buffer,
    content_width: u32,
    measure: Option<&dyn TextMeasure>,
    min_width: u32,
) -> Vec<WrappedLine> {
    let Some(measure) = measure else {
        return vec![WrappedLine::new(0, 0, buffer.text())];
    };
    let width = content_width.max(min_width);
    let mut out = Vec::with_capacity(buffer.line_count());
    for line in 0..buffer.line_count() {
        wrap_line(&mut out, line, &buffer.line_text(line), width, measure);
    }
    out
}

/// Append the rows of one logical line to `out`.
pub fn wrap_line(
    out: &mut Vec<WrappedLine>,
    logical_line: usize,
    line: &str,
    width: u32,
    measure: &dyn TextMeasure,
) {
    if line.is_empty() {
        out.push(WrappedLine::new(logical_line, 0, ""));
        return;
    }
    let mut tokens = split_tokens(line);
    let mut col = 0usize;
    let mut t = 0usize;
    while t < tokens.len() {
        let mut trial = String::new();
        let mut k = t;
        while k < tokens.len() {
            let keep = trial.len();
            trial.push_str(tokens[k]);
            if measure.text_width(&trial) <= width {
                k += 1;
            } else {
                trial.truncate(keep);
                break;
            }
        }

        if k == t {
            // tokens[t] alone is too wide.
            let (piece, rest) = split_fitting(tokens[t], width, measure);
            let taken = piece.chars().count();
            out.push(WrappedLine::new(logical_line, col, piece));
            col += taken;
            if rest.is_empty() {
                t += 1;
            } else {
                tokens[t] = rest;
            }
            continue;
        }

        let taken = trial.chars().count();
        out.push(WrappedLine::new(logical_line, col, trial));
        col += taken;
        t = k;
    }
}

/// Longest prefix of `token` that fits `width`, at least one character.
fn split_fitting<'a>(token: &'a str, width: u32, measure: &dyn TextMeasure) -> (&'a str, &'a str) {
    let mut take = 0usize;
    for (idx, ch) in token.char_indices() {
        let end = idx + ch.len_utf8();
        if measure.text_width(&token[..end]) <= width {
            take = end;
        } else {
            break;
        }
    }
    if take == 0 {
        take = token.chars().next().map_or(0, char::len_utf8);
    }
    token.split_at(take)
}
