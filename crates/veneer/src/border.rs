//! Border glyph sets and border drawing.
//!
//! A [`Border`] holds 13 glyph slots: four edges, four corners and the five
//! junctions tables use for inner rules. Presets can be looked up by name
//! with [`Border::by_name`]. [`compose`] draws the enabled edges around an
//! already padded block, coloring each edge on its own.
//!
//! ```rust
//! use veneer::{Border, BorderEdges, ColorProfile, EdgeColors};
//! use veneer::border::compose;
//!
//! let boxed = compose(
//!     "hi",
//!     &Border::rounded(),
//!     BorderEdges::all(),
//!     &EdgeColors::default(),
//!     ColorProfile::Ascii,
//!     true,
//! );
//! assert_eq!(boxed, "╭──╮\n│hi│\n╰──╯");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::color::{Color, ColorProfile, Layer};
use crate::metrics::{grapheme_width, visible_width};
use crate::position::Sides;

/// Border characters for all edges and corners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Border {
    /// Top edge character(s).
    pub top: String,
    /// Bottom edge character(s).
    pub bottom: String,
    /// Left edge character(s).
    pub left: String,
    /// Right edge character(s).
    pub right: String,
    /// Top-left corner.
    pub top_left: String,
    /// Top-right corner.
    pub top_right: String,
    /// Bottom-left corner.
    pub bottom_left: String,
    /// Bottom-right corner.
    pub bottom_right: String,
    /// Junction where a horizontal rule meets the left edge.
    pub middle_left: String,
    /// Junction where a horizontal rule meets the right edge.
    pub middle_right: String,
    /// Crossing of a horizontal rule and a column rule.
    pub middle: String,
    /// Junction where a column rule meets the top edge.
    pub middle_top: String,
    /// Junction where a column rule meets the bottom edge.
    pub middle_bottom: String,
}

/// Build a border from its 13 glyphs in field order.
macro_rules! glyphs {
    ($t:expr, $b:expr, $l:expr, $r:expr, $tl:expr, $tr:expr, $bl:expr, $br:expr,
     $ml:expr, $mr:expr, $m:expr, $mt:expr, $mb:expr) => {
        Border {
            top: $t.into(),
            bottom: $b.into(),
            left: $l.into(),
            right: $r.into(),
            top_left: $tl.into(),
            top_right: $tr.into(),
            bottom_left: $bl.into(),
            bottom_right: $br.into(),
            middle_left: $ml.into(),
            middle_right: $mr.into(),
            middle: $m.into(),
            middle_top: $mt.into(),
            middle_bottom: $mb.into(),
        }
    };
}

impl Border {
    /// No glyphs at all. Enabled edges on this border draw as spaces.
    pub const fn none() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            left: String::new(),
            right: String::new(),
            top_left: String::new(),
            top_right: String::new(),
            bottom_left: String::new(),
            bottom_right: String::new(),
            middle_left: String::new(),
            middle_right: String::new(),
            middle: String::new(),
            middle_top: String::new(),
            middle_bottom: String::new(),
        }
    }

    /// Light box-drawing lines, square corners: `┌─┐`.
    pub fn normal() -> Self {
        glyphs!("─", "─", "│", "│", "┌", "┐", "└", "┘", "├", "┤", "┼", "┬", "┴")
    }

    /// Light lines with arc corners: `╭─╮`.
    pub fn rounded() -> Self {
        glyphs!("─", "─", "│", "│", "╭", "╮", "╰", "╯", "├", "┤", "┼", "┬", "┴")
    }

    pub fn block() -> Self {
        glyphs!("█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█", "█")
    }

    /// Half blocks hugging the outside of the box. No junction glyphs.
    pub fn outer_half_block() -> Self {
        glyphs!("▀", "▄", "▌", "▐", "▛", "▜", "▙", "▟", "", "", "", "", "")
    }

    /// Half blocks hugging the inside of the box. No junction glyphs.
    pub fn inner_half_block() -> Self {
        glyphs!("▄", "▀", "▐", "▌", "▗", "▖", "▝", "▘", "", "", "", "", "")
    }

    /// Heavy lines: `┏━┓`.
    pub fn thick() -> Self {
        glyphs!("━", "━", "┃", "┃", "┏", "┓", "┗", "┛", "┣", "┫", "╋", "┳", "┻")
    }

    /// Double lines: `╔═╗`.
    pub fn double() -> Self {
        glyphs!("═", "═", "║", "║", "╔", "╗", "╚", "╝", "╠", "╣", "╬", "╦", "╩")
    }

    /// Spaces in every slot. Takes up room without drawing anything.
    pub fn hidden() -> Self {
        glyphs!(" ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ", " ")
    }

    /// `+`, `-` and `|` only, for terminals without box drawing.
    pub fn ascii() -> Self {
        glyphs!("-", "-", "|", "|", "+", "+", "+", "+", "+", "+", "+", "+", "+")
    }

    /// Pipes at every corner and junction, as in a Markdown table.
    pub fn markdown() -> Self {
        glyphs!("-", "-", "|", "|", "|", "|", "|", "|", "|", "|", "|", "|", "|")
    }

    /// Look up a preset by name, such as `"rounded"` or `"double"`.
    pub fn by_name(name: &str) -> Option<Self> {
        let border = match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Self::none(),
            "normal" => Self::normal(),
            "rounded" => Self::rounded(),
            "block" => Self::block(),
            "outer_half_block" => Self::outer_half_block(),
            "inner_half_block" => Self::inner_half_block(),
            "thick" => Self::thick(),
            "double" => Self::double(),
            "hidden" => Self::hidden(),
            "ascii" => Self::ascii(),
            "markdown" => Self::markdown(),
            _ => return None,
        };
        Some(border)
    }

    /// Cells taken by the left edge: its widest corner or side glyph.
    pub fn left_size(&self) -> usize {
        max_glyph_width(&self.top_left)
            .max(max_glyph_width(&self.left))
            .max(max_glyph_width(&self.bottom_left))
    }

    /// Cells taken by the right edge.
    pub fn right_size(&self) -> usize {
        max_glyph_width(&self.top_right)
            .max(max_glyph_width(&self.right))
            .max(max_glyph_width(&self.bottom_right))
    }
}

fn max_glyph_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).max().unwrap_or(0)
}

/// Edges to draw. A style with a border but no edge flags draws all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderEdges {
    pub const fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    pub const fn is_all(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }
}

/// Resolved colors for each edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeColors {
    pub foreground: Sides<Color>,
    pub background: Sides<Color>,
}

/// Wrap `s` in the escapes for `fg` and `bg`, or return it bare if both are
/// absent at this tier.
pub(crate) fn paint(s: &str, fg: &Color, bg: &Color, profile: ColorProfile, dark_bg: bool) -> String {
    let mut seq = fg.resolve(profile, dark_bg, Layer::Foreground);
    seq.push_str(&bg.resolve(profile, dark_bg, Layer::Background));
    if seq.is_empty() || s.is_empty() {
        return s.to_string();
    }
    format!("{seq}{s}\x1b[0m")
}

/// Repeat the graphemes of `glyph` cyclically to fill exactly `width` cells.
///
/// A glyph that would overflow is replaced by spaces. An empty glyph fills
/// with spaces.
pub(crate) fn fill_edge(glyph: &str, width: usize) -> String {
    let graphemes: Vec<&str> = glyph.graphemes(true).collect();
    if graphemes.is_empty() {
        return " ".repeat(width);
    }

    let mut out = String::with_capacity(width * glyph.len());
    let mut used = 0;
    for g in graphemes.iter().cycle() {
        let w = grapheme_width(g);
        if w == 0 || used + w > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn or_space(glyph: &str) -> &str {
    if glyph.is_empty() { " " } else { glyph }
}

/// Draw a border around a block.
///
/// Lines shorter than the widest line are padded with spaces. A disabled
/// top or bottom edge drops the whole row, corners included; corners are
/// drawn only where the adjoining side edge is also enabled.
pub fn compose(
    block: &str,
    border: &Border,
    edges: BorderEdges,
    colors: &EdgeColors,
    profile: ColorProfile,
    dark_bg: bool,
) -> String {
    if !edges.any() {
        return block.to_string();
    }

    let lines: Vec<&str> = block.split('\n').collect();
    let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let fg = &colors.foreground;
    let bg = &colors.background;

    let mut out = Vec::with_capacity(lines.len() + 2);

    if edges.top {
        let mut row = String::new();
        if edges.left {
            row.push_str(or_space(&border.top_left));
        }
        row.push_str(&fill_edge(&border.top, inner));
        if edges.right {
            row.push_str(or_space(&border.top_right));
        }
        out.push(paint(&row, &fg.top, &bg.top, profile, dark_bg));
    }

    let left = paint(or_space(&border.left), &fg.left, &bg.left, profile, dark_bg);
    let right = paint(or_space(&border.right), &fg.right, &bg.right, profile, dark_bg);
    for line in &lines {
        let mut row = String::new();
        if edges.left {
            row.push_str(&left);
        }
        row.push_str(line);
        row.push_str(&" ".repeat(inner - visible_width(line)));
        if edges.right {
            row.push_str(&right);
        }
        out.push(row);
    }

    if edges.bottom {
        let mut row = String::new();
        if edges.left {
            row.push_str(or_space(&border.bottom_left));
        }
        row.push_str(&fill_edge(&border.bottom, inner));
        if edges.right {
            row.push_str(or_space(&border.bottom_right));
        }
        out.push(paint(&row, &fg.bottom, &bg.bottom, profile, dark_bg));
    }

    out.join("\n")
}
