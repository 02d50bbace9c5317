//! Escape-aware text measurement.
//!
//! Terminal strings carry escape sequences (SGR colors, cursor movement,
//! OSC hyperlinks) that occupy no cells on screen. Every measurement here
//! skips them and counts display cells per grapheme cluster: wide glyphs
//! count 2, combining marks 0, everything else 1.
//!
//! # Example
//!
//! ```rust
//! use veneer::{height, size, width};
//!
//! assert_eq!(width("\x1b[1mhello\x1b[0m"), 5);
//! assert_eq!(height("a\nb"), 2);
//! assert_eq!(size("hi\nthere"), (5, 2));
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// A piece of a terminal string: either an escape sequence or printable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete escape sequence, including the leading ESC.
    Escape(&'a str),
    /// A run of text containing no ESC byte.
    Text(&'a str),
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Split a string into escape sequences and text runs.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.starts_with('\x1b') {
            let len = escape_len(self.rest);
            let (esc, rest) = self.rest.split_at(len);
            self.rest = rest;
            Some(Segment::Escape(esc))
        } else {
            let end = self.rest.find('\x1b').unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Segment::Text(text))
        }
    }
}

/// Length in bytes of the escape sequence at the start of `s`.
///
/// `s` must start with ESC. Unterminated sequences extend to the end.
fn escape_len(s: &str) -> usize {
    let mut chars = s.char_indices().skip(1);
    match chars.next() {
        None => 1,
        Some((_, '[')) => {
            // CSI: parameters, intermediates, then a final byte in @..~
            for (i, c) in chars {
                if ('@'..='~').contains(&c) {
                    return i + c.len_utf8();
                }
            }
            s.len()
        }
        Some((_, ']')) => {
            // OSC: terminated by BEL or ST (ESC \)
            for (i, c) in chars {
                if c == '\x07' {
                    return i + 1;
                }
                if c == '\x1b' {
                    return if s[i + 1..].starts_with('\\') { i + 2 } else { i };
                }
            }
            s.len()
        }
        Some((i, c)) => i + c.len_utf8(),
    }
}

/// Display width of a single grapheme cluster.
pub(crate) fn grapheme_width(g: &str) -> usize {
    g.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .max()
        .unwrap_or(0)
}

/// Display width of a single line, ignoring escape sequences.
///
/// Line breaks are not treated specially; use [`width`] for multi-line text.
pub fn visible_width(line: &str) -> usize {
    segments(line)
        .map(|seg| match seg {
            Segment::Escape(_) => 0,
            Segment::Text(t) => t.graphemes(true).map(grapheme_width).sum(),
        })
        .sum()
}

/// Width of the widest line in `s`. Empty text has width 0.
pub fn width(s: &str) -> usize {
    s.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Number of lines in `s`, at least 1.
///
/// A trailing line break starts a new (empty) line.
pub fn height(s: &str) -> usize {
    s.split('\n').count().max(1)
}

/// Width and height of `s` as a pair.
pub fn size(s: &str) -> (usize, usize) {
    (width(s), height(s))
}

/// Remove every escape sequence from `s`.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for seg in segments(s) {
        if let Segment::Text(t) = seg {
            out.push_str(t);
        }
    }
    out
}

/// Cut a single line down to at most `max` display cells.
///
/// Escape sequences are kept even after the cut so that resets still reach
/// the terminal. A wide glyph that would straddle the limit is dropped.
pub fn truncate_width(line: &str, max: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut full = false;

    for seg in segments(line) {
        match seg {
            Segment::Escape(esc) => out.push_str(esc),
            Segment::Text(_) if full => {}
            Segment::Text(t) => {
                for g in t.graphemes(true) {
                    let w = grapheme_width(g);
                    if used + w > max {
                        full = true;
                        break;
                    }
                    used += w;
                    out.push_str(g);
                }
            }
        }
    }

    out
}
