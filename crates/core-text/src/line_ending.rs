//! Line ending normalization for text entering the buffer (file load, paste).
//!
//! The buffer only ever stores `'\n'`. CRLF and lone CR are converted on the
//! way in; the dominant original style is reported so a host can restore it
//! on save.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Cr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub normalized: String,
    pub original: LineEnding,
    pub had_trailing_newline: bool,
    /// More than one style was present.
    pub mixed: bool,
}

/// Convert CRLF / CR to LF and detect the majority style.
///
/// Ties are resolved with precedence CRLF > LF > CR. Input without any line
/// break reports `Lf`.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let mut normalized = String::with_capacity(input.len());
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                    crlf += 1;
                } else {
                    cr += 1;
                }
                normalized.push('\n');
            }
            '\n' => {
                lf += 1;
                normalized.push('\n');
            }
            other => normalized.push(other),
        }
    }

    let mut original = LineEnding::Lf;
    let mut max = 0usize;
    for (style, count) in [
        (LineEnding::Crlf, crlf),
        (LineEnding::Lf, lf),
        (LineEnding::Cr, cr),
    ] {
        if count > max {
            max = count;
            original = style;
        }
    }
    let styles_seen = [crlf, lf, cr].iter().filter(|&&c| c > 0).count();

    NormalizedText {
        had_trailing_newline: input.ends_with('\n') || input.ends_with('\r'),
        normalized,
        original,
        mixed: styles_seen > 1,
    }
}
