#![forbid(unsafe_code)]
// Allow these clippy lints for builder ergonomics and layout arithmetic
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::items_after_test_module)]

//! # Veneer
//!
//! Declarative styling and layout for terminal text.
//!
//! A [`Style`] is a bag of optional properties (colors, text attributes,
//! padding, margin, borders, alignment, size constraints). Rendering a
//! string through a style produces a rectangular block of text with ANSI
//! escapes sized for whatever the terminal supports. Blocks can then be
//! composed with [`join_horizontal`], [`join_vertical`] and [`place`].
//!
//! ## Quick Start
//!
//! ```rust
//! use veneer::{Border, Color, Position, Style};
//!
//! let style = Style::new()
//!     .bold(true)
//!     .foreground(Color::parse("#ff00ff").unwrap())
//!     .padding(&[1, 2]).unwrap()
//!     .border(Border::rounded())
//!     .align(Position::CENTER);
//!
//! println!("{}", style.render("Hello, Veneer!"));
//! ```
//!
//! ## Colors
//!
//! Colors are resolved per render against the renderer's color profile:
//!
//! ```rust
//! use veneer::{Color, ColorProfile, Layer};
//!
//! let orange = Color::parse("#ff8800").unwrap();
//! assert_eq!(orange.resolve(ColorProfile::TrueColor, true, Layer::Foreground),
//!            "\x1b[38;2;255;136;0m");
//! assert_eq!(orange.resolve(ColorProfile::Ascii, true, Layer::Foreground), "");
//!
//! let adaptive = Color::adaptive("#000000", "#ffffff").unwrap();
//! assert!(!adaptive.is_absent());
//! ```
//!
//! ## Layout
//!
//! CSS-like padding and margin with shorthand notation:
//!
//! ```rust
//! use veneer::{ColorProfile, Style};
//!
//! let style = Style::new().padding(&[0, 1]).unwrap();
//! assert_eq!(style.render_with(&["hi"], ColorProfile::Ascii, true), " hi ");
//!
//! // Top, right, bottom, left (clockwise)
//! let style = Style::new().margin(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(style.get_margin().left, 4);
//! ```

pub mod border;
pub mod color;
pub mod error;
pub mod join;
pub mod metrics;
pub mod place;
pub mod position;
pub mod property;
pub mod render;
pub mod renderer;
pub mod resize;
pub mod style;
pub mod stylesheet;
pub mod table;
pub mod themes;
pub mod whitespace;

// Re-exports
pub use border::{compose, Border, BorderEdges, EdgeColors};
pub use color::{Color, ColorProfile, Layer, Literal, Rgb, TierColors};
pub use error::{Error, Result};
pub use join::{join_horizontal, join_vertical};
pub use metrics::{height, size, strip_ansi, truncate_width, visible_width, width};
pub use place::{
    place, place_horizontal, place_horizontal_with, place_vertical, place_vertical_with,
    place_with,
};
pub use position::{Position, Sides};
pub use property::{PropKey, Property, PropertySet, Transform};
pub use render::TextAttrs;
pub use renderer::{
    color_profile, default_renderer, has_dark_background, set_default_renderer, Environment,
    OutputTarget, Renderer,
};
pub use resize::{column_minimums, resize_columns};
pub use style::Style;
pub use stylesheet::{StyleDef, StyleSheet, StyleSheetError};
pub use table::{Data, Filter, StringData, Table, HEADER_ROW};
pub use themes::{catppuccin_mocha, dracula, gleam, CatppuccinMocha, Dracula, Gleam};
pub use whitespace::Whitespace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::border::Border;
    pub use crate::color::{Color, ColorProfile};
    pub use crate::join::{join_horizontal, join_vertical};
    pub use crate::place::place;
    pub use crate::position::{Position, Sides};
    pub use crate::renderer::Renderer;
    pub use crate::style::Style;
    pub use crate::table::Table;
    pub use crate::whitespace::Whitespace;
}

/// Create a new empty style.
///
/// This is equivalent to `Style::new()`.
pub fn new_style() -> Style {
    Style::new()
}

/// A byte range of text and the style to render it with.
#[derive(Debug, Clone)]
pub struct Range {
    /// Inclusive start, in bytes.
    pub start: usize,
    /// Exclusive end, in bytes.
    pub end: usize,
    pub style: Style,
}

impl Range {
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }
}

/// Shorthand for [`Range::new`].
pub fn new_range(start: usize, end: usize, style: Style) -> Range {
    Range::new(start, end, style)
}

/// Render each range of `s` with its own style, leaving the gaps as is.
///
/// Ranges are applied in start order and should not overlap. Bounds past
/// the end are clamped; a range that does not fall on character
/// boundaries is left unstyled.
///
/// ```rust
/// use veneer::{new_range, style_ranges, ColorProfile, Renderer, Style};
/// use std::sync::Arc;
///
/// let plain = Arc::new(Renderer::fixed(ColorProfile::Ascii, true));
/// let bold = Style::new().bold(true).renderer(plain);
/// let out = style_ranges("Hello, World!", &[new_range(0, 5, bold)]);
/// assert_eq!(out, "\x1b[1mHello\x1b[0m, World!");
/// ```
pub fn style_ranges(s: &str, ranges: &[Range]) -> String {
    if ranges.is_empty() {
        return s.to_string();
    }

    let mut sorted: Vec<&Range> = ranges.iter().collect();
    sorted.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    for range in sorted {
        let start = range.start.min(s.len()).max(pos);
        let end = range.end.min(s.len());
        if end <= start {
            continue;
        }
        let (Some(gap), Some(text)) = (s.get(pos..start), s.get(start..end)) else {
            continue;
        };
        out.push_str(gap);
        out.push_str(&range.style.render(text));
        pos = end;
    }
    out.push_str(s.get(pos..).unwrap_or_default());
    out
}

/// Render the characters at `indices` with `matched` and every other
/// character with `unmatched`. Indices out of bounds are ignored.
///
/// Consecutive characters with the same outcome are rendered together.
pub fn style_runes(s: &str, indices: &[usize], matched: Style, unmatched: Style) -> String {
    let picked: std::collections::BTreeSet<usize> = indices.iter().copied().collect();

    let mut out = String::new();
    let mut run = String::new();
    let mut run_matched = None;
    for (i, c) in s.chars().enumerate() {
        let is_match = picked.contains(&i);
        if run_matched.is_some_and(|m| m != is_match) {
            let style = if is_match { &unmatched } else { &matched };
            out.push_str(&style.render(&run));
            run.clear();
        }
        run_matched = Some(is_match);
        run.push(c);
    }
    if let Some(m) = run_matched {
        let style = if m { &matched } else { &unmatched };
        out.push_str(&style.render(&run));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ansi() -> Arc<Renderer> {
        Arc::new(Renderer::fixed(ColorProfile::Ansi, true))
    }

    #[test]
    fn test_new_style_is_empty() {
        assert!(new_style().properties().is_empty());
    }

    #[test]
    fn test_style_ranges() {
        let bold = Style::new().bold(true).renderer(ansi());
        let italic = Style::new().italic(true).renderer(ansi());
        let out = style_ranges(
            "Hello, World!",
            &[new_range(7, 12, italic), new_range(0, 5, bold)],
        );
        assert_eq!(
            out,
            "\x1b[1mHello\x1b[0m, \x1b[3mWorld\x1b[0m!"
        );
    }

    #[test]
    fn test_style_ranges_clamps_and_skips() {
        let bold = Style::new().bold(true).renderer(ansi());
        assert_eq!(style_ranges("abc", &[]), "abc");
        assert_eq!(
            style_ranges("abc", &[new_range(2, 99, bold.clone())]),
            "ab\x1b[1mc\x1b[0m"
        );
        // splits inside a multi-byte character are left alone
        assert_eq!(style_ranges("é", &[new_range(1, 2, bold)]), "é");
    }

    #[test]
    fn test_style_runes_groups_runs() {
        let bold = Style::new().bold(true).renderer(ansi());
        let plain = Style::new().renderer(ansi());
        let out = style_runes("abcd", &[0, 1, 9], bold, plain);
        assert_eq!(out, "\x1b[1mab\x1b[0mcd");
        assert_eq!(style_runes("", &[0], Style::new(), Style::new()), "");
    }
}
