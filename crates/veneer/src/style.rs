//! Style definition and builder.
//!
//! The [`Style`] struct is the core of veneer, providing a fluent API for
//! building terminal styles. Every setter consumes the style and returns a
//! new one; nothing is shared between the old and the new value.
//!
//! # Example
//!
//! ```rust
//! use veneer::{Color, Style};
//!
//! let style = Style::new()
//!     .bold(true)
//!     .foreground(Color::parse("#ff0000")?)
//!     .padding(&[1])?;
//!
//! println!("{}", style.render("Hello!"));
//! # Ok::<(), veneer::Error>(())
//! ```

use std::sync::Arc;

use crate::border::{Border, BorderEdges, EdgeColors};
use crate::color::Color;
use crate::error::Result;
use crate::position::{Position, Sides};
use crate::property::{PropKey, Property, PropertySet, Transform};
use crate::renderer::{default_renderer, Renderer};

/// Default number of spaces a tab expands to.
pub const DEFAULT_TAB_WIDTH: i16 = 4;

/// A terminal style definition.
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: PropertySet,
    renderer: Option<Arc<Renderer>>,
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        let same_renderer = match (&self.renderer, &other.renderer) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_renderer && self.props == other.props
    }
}

impl Style {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Generic Access ====================

    /// Set a property.
    pub fn set(mut self, prop: Property) -> Self {
        self.props.insert(prop);
        self
    }

    /// Remove a property. The key reads as unset afterwards.
    pub fn unset(mut self, key: PropKey) -> Self {
        self.props.remove(key);
        self
    }

    /// Look up a property.
    pub fn get(&self, key: PropKey) -> Option<&Property> {
        self.props.get(key)
    }

    /// Check if a property is set.
    pub fn is_set(&self, key: PropKey) -> bool {
        self.props.contains(key)
    }

    /// The underlying property set.
    pub fn properties(&self) -> &PropertySet {
        &self.props
    }

    /// Fill in properties set on `parent` but not on this style.
    ///
    /// Padding and margin are never taken from the parent.
    pub fn inherit(mut self, parent: &Style) -> Self {
        for prop in parent.props.iter() {
            let key = prop.key();
            if key.is_spacing() || self.props.contains(key) {
                continue;
            }
            self.props.insert(prop.clone());
        }
        self
    }

    /// An independent copy of this style.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Bind the style to a renderer.
    pub fn renderer(mut self, r: Arc<Renderer>) -> Self {
        self.renderer = Some(r);
        self
    }

    /// The bound renderer, or the process default.
    pub fn get_renderer(&self) -> Arc<Renderer> {
        self.renderer.clone().unwrap_or_else(default_renderer)
    }

    /// Set the text rendered ahead of any arguments.
    pub fn set_string(self, s: impl Into<String>) -> Self {
        self.set(Property::LiteralString(s.into()))
    }

    /// The literal string, or `""`.
    pub fn value(&self) -> &str {
        match self.props.get(PropKey::LiteralString) {
            Some(Property::LiteralString(s)) => s,
            _ => "",
        }
    }

    // ==================== Text Attributes ====================

    /// Set bold text.
    pub fn bold(self, v: bool) -> Self {
        self.set(Property::Bold(v))
    }

    /// Set italic text.
    pub fn italic(self, v: bool) -> Self {
        self.set(Property::Italic(v))
    }

    /// Set underlined text.
    pub fn underline(self, v: bool) -> Self {
        self.set(Property::Underline(v))
    }

    /// Set strikethrough text.
    pub fn strikethrough(self, v: bool) -> Self {
        self.set(Property::Strikethrough(v))
    }

    /// Set reverse video (swap fg/bg).
    pub fn reverse(self, v: bool) -> Self {
        self.set(Property::Reverse(v))
    }

    /// Set blinking text.
    pub fn blink(self, v: bool) -> Self {
        self.set(Property::Blink(v))
    }

    /// Set faint/dim text.
    pub fn faint(self, v: bool) -> Self {
        self.set(Property::Faint(v))
    }

    /// Set whether runs of spaces are underlined.
    pub fn underline_spaces(self, v: bool) -> Self {
        self.set(Property::UnderlineSpaces(v))
    }

    /// Set whether runs of spaces are struck through.
    pub fn strikethrough_spaces(self, v: bool) -> Self {
        self.set(Property::StrikethroughSpaces(v))
    }

    /// Set whether alignment and padding whitespace gets the background.
    pub fn color_whitespace(self, v: bool) -> Self {
        self.set(Property::ColorWhitespace(v))
    }

    // ==================== Colors ====================

    /// Set the foreground color.
    pub fn foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::Foreground(color.into()))
    }

    /// Set the background color.
    pub fn background(self, color: impl Into<Color>) -> Self {
        self.set(Property::Background(color.into()))
    }

    // ==================== Dimensions ====================

    /// Set the width, padding included.
    pub fn width(self, w: u16) -> Self {
        self.set(Property::Width(w))
    }

    /// Set the height, padding included.
    pub fn height(self, h: u16) -> Self {
        self.set(Property::Height(h))
    }

    /// Set the maximum width.
    pub fn max_width(self, w: u16) -> Self {
        self.set(Property::MaxWidth(w))
    }

    /// Set the maximum height.
    pub fn max_height(self, h: u16) -> Self {
        self.set(Property::MaxHeight(h))
    }

    // ==================== Alignment ====================

    /// Set horizontal alignment.
    pub fn align(self, p: Position) -> Self {
        self.align_horizontal(p)
    }

    /// Set horizontal alignment.
    pub fn align_horizontal(self, p: Position) -> Self {
        self.set(Property::AlignHorizontal(p))
    }

    /// Set vertical alignment.
    pub fn align_vertical(self, p: Position) -> Self {
        self.set(Property::AlignVertical(p))
    }

    // ==================== Padding ====================

    /// Set padding with 1-4 values, clockwise from the top.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for any other count.
    pub fn padding(self, values: &[u16]) -> Result<Self> {
        let s = Sides::from_shorthand("padding", values)?;
        Ok(self
            .padding_top(s.top)
            .padding_right(s.right)
            .padding_bottom(s.bottom)
            .padding_left(s.left))
    }

    /// Set top padding.
    pub fn padding_top(self, n: u16) -> Self {
        self.set(Property::PaddingTop(n))
    }

    /// Set right padding.
    pub fn padding_right(self, n: u16) -> Self {
        self.set(Property::PaddingRight(n))
    }

    /// Set bottom padding.
    pub fn padding_bottom(self, n: u16) -> Self {
        self.set(Property::PaddingBottom(n))
    }

    /// Set left padding.
    pub fn padding_left(self, n: u16) -> Self {
        self.set(Property::PaddingLeft(n))
    }

    // ==================== Margin ====================

    /// Set margin with 1-4 values, clockwise from the top.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for any other count.
    pub fn margin(self, values: &[u16]) -> Result<Self> {
        let s = Sides::from_shorthand("margin", values)?;
        Ok(self
            .margin_top(s.top)
            .margin_right(s.right)
            .margin_bottom(s.bottom)
            .margin_left(s.left))
    }

    /// Set top margin.
    pub fn margin_top(self, n: u16) -> Self {
        self.set(Property::MarginTop(n))
    }

    /// Set right margin.
    pub fn margin_right(self, n: u16) -> Self {
        self.set(Property::MarginRight(n))
    }

    /// Set bottom margin.
    pub fn margin_bottom(self, n: u16) -> Self {
        self.set(Property::MarginBottom(n))
    }

    /// Set left margin.
    pub fn margin_left(self, n: u16) -> Self {
        self.set(Property::MarginLeft(n))
    }

    /// Set margin background color.
    pub fn margin_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::MarginBackground(color.into()))
    }

    // ==================== Border ====================

    /// Set the border glyphs. With no edge flags set, all edges are drawn.
    pub fn border(self, border: Border) -> Self {
        self.set(Property::BorderStyle(border))
    }

    /// Set the border glyphs.
    pub fn border_style(self, border: Border) -> Self {
        self.border(border)
    }

    /// Enable or disable top border.
    pub fn border_top(self, v: bool) -> Self {
        self.set(Property::BorderTop(v))
    }

    /// Enable or disable right border.
    pub fn border_right(self, v: bool) -> Self {
        self.set(Property::BorderRight(v))
    }

    /// Enable or disable bottom border.
    pub fn border_bottom(self, v: bool) -> Self {
        self.set(Property::BorderBottom(v))
    }

    /// Enable or disable left border.
    pub fn border_left(self, v: bool) -> Self {
        self.set(Property::BorderLeft(v))
    }

    /// Set border foreground color for all sides.
    pub fn border_foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderForeground(color.into()))
    }

    /// Set top border foreground.
    pub fn border_top_foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderTopForeground(color.into()))
    }

    /// Set right border foreground.
    pub fn border_right_foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderRightForeground(color.into()))
    }

    /// Set bottom border foreground.
    pub fn border_bottom_foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderBottomForeground(color.into()))
    }

    /// Set left border foreground.
    pub fn border_left_foreground(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderLeftForeground(color.into()))
    }

    /// Set border background color for all sides.
    pub fn border_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderBackground(color.into()))
    }

    /// Set top border background.
    pub fn border_top_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderTopBackground(color.into()))
    }

    /// Set right border background.
    pub fn border_right_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderRightBackground(color.into()))
    }

    /// Set bottom border background.
    pub fn border_bottom_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderBottomBackground(color.into()))
    }

    /// Set left border background.
    pub fn border_left_background(self, color: impl Into<Color>) -> Self {
        self.set(Property::BorderLeftBackground(color.into()))
    }

    // ==================== Other ====================

    /// Set inline mode (single line, no margins/padding/borders).
    pub fn inline(self, v: bool) -> Self {
        self.set(Property::Inline(v))
    }

    /// Set tab width. 0 removes tabs, any negative value keeps them.
    pub fn tab_width(self, n: i16) -> Self {
        self.set(Property::TabWidth(n))
    }

    /// Set text transform function.
    pub fn transform<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.set(Property::Transform(Transform::new(f)))
    }

    // ==================== Getters ====================

    fn flag(&self, key: PropKey) -> bool {
        self.props.flag(key).unwrap_or(false)
    }

    fn size(&self, key: PropKey) -> u16 {
        self.props.size(key).unwrap_or(0)
    }

    fn color(&self, key: PropKey) -> Color {
        self.props.color(key).cloned().unwrap_or_default()
    }

    pub fn get_bold(&self) -> bool {
        self.flag(PropKey::Bold)
    }

    pub fn get_italic(&self) -> bool {
        self.flag(PropKey::Italic)
    }

    pub fn get_underline(&self) -> bool {
        self.flag(PropKey::Underline)
    }

    pub fn get_strikethrough(&self) -> bool {
        self.flag(PropKey::Strikethrough)
    }

    pub fn get_reverse(&self) -> bool {
        self.flag(PropKey::Reverse)
    }

    pub fn get_blink(&self) -> bool {
        self.flag(PropKey::Blink)
    }

    pub fn get_faint(&self) -> bool {
        self.flag(PropKey::Faint)
    }

    /// Whether space runs are underlined. Falls back to the underline flag.
    pub fn get_underline_spaces(&self) -> bool {
        self.props
            .flag(PropKey::UnderlineSpaces)
            .unwrap_or_else(|| self.get_underline())
    }

    /// Whether space runs are struck through. Falls back to the
    /// strikethrough flag.
    pub fn get_strikethrough_spaces(&self) -> bool {
        self.props
            .flag(PropKey::StrikethroughSpaces)
            .unwrap_or_else(|| self.get_strikethrough())
    }

    pub fn get_color_whitespace(&self) -> bool {
        self.flag(PropKey::ColorWhitespace)
    }

    pub fn get_inline(&self) -> bool {
        self.flag(PropKey::Inline)
    }

    pub fn get_foreground(&self) -> Color {
        self.color(PropKey::Foreground)
    }

    pub fn get_background(&self) -> Color {
        self.color(PropKey::Background)
    }

    pub fn get_margin_background(&self) -> Color {
        self.color(PropKey::MarginBackground)
    }

    pub fn get_width(&self) -> u16 {
        self.size(PropKey::Width)
    }

    pub fn get_height(&self) -> u16 {
        self.size(PropKey::Height)
    }

    pub fn get_max_width(&self) -> u16 {
        self.size(PropKey::MaxWidth)
    }

    pub fn get_max_height(&self) -> u16 {
        self.size(PropKey::MaxHeight)
    }

    pub fn get_align_horizontal(&self) -> Position {
        self.props
            .position(PropKey::AlignHorizontal)
            .unwrap_or_default()
    }

    pub fn get_align_vertical(&self) -> Position {
        self.props
            .position(PropKey::AlignVertical)
            .unwrap_or_default()
    }

    /// Padding on each side; unset sides are 0.
    pub fn get_padding(&self) -> Sides<u16> {
        Sides::new(
            self.size(PropKey::PaddingTop),
            self.size(PropKey::PaddingRight),
            self.size(PropKey::PaddingBottom),
            self.size(PropKey::PaddingLeft),
        )
    }

    /// Margin on each side; unset sides are 0.
    pub fn get_margin(&self) -> Sides<u16> {
        Sides::new(
            self.size(PropKey::MarginTop),
            self.size(PropKey::MarginRight),
            self.size(PropKey::MarginBottom),
            self.size(PropKey::MarginLeft),
        )
    }

    /// Tab width, [`DEFAULT_TAB_WIDTH`] when unset.
    pub fn get_tab_width(&self) -> i16 {
        match self.props.get(PropKey::TabWidth) {
            Some(Property::TabWidth(n)) => *n,
            _ => DEFAULT_TAB_WIDTH,
        }
    }

    pub fn get_transform(&self) -> Option<&Transform> {
        match self.props.get(PropKey::Transform) {
            Some(Property::Transform(t)) => Some(t),
            _ => None,
        }
    }

    /// The border glyphs, [`Border::normal`] when only edges are set.
    pub fn get_border_style(&self) -> Border {
        match self.props.get(PropKey::BorderStyle) {
            Some(Property::BorderStyle(b)) => b.clone(),
            _ => Border::normal(),
        }
    }

    /// Edges that will be drawn.
    ///
    /// A border style without edge flags enables every edge; edge flags
    /// decide on their own otherwise.
    pub fn get_border_edges(&self) -> BorderEdges {
        let flags = [
            PropKey::BorderTop,
            PropKey::BorderRight,
            PropKey::BorderBottom,
            PropKey::BorderLeft,
        ];
        if !flags.iter().any(|k| self.props.contains(*k)) {
            return if self.props.contains(PropKey::BorderStyle) {
                BorderEdges::all()
            } else {
                BorderEdges::none()
            };
        }
        BorderEdges {
            top: self.flag(PropKey::BorderTop),
            right: self.flag(PropKey::BorderRight),
            bottom: self.flag(PropKey::BorderBottom),
            left: self.flag(PropKey::BorderLeft),
        }
    }

    /// Border colors per edge: edge-specific, else all-sides, else absent.
    pub fn get_border_colors(&self) -> EdgeColors {
        let pick = |edge: PropKey, all: PropKey| {
            self.props
                .color(edge)
                .or_else(|| self.props.color(all))
                .cloned()
                .unwrap_or_default()
        };
        let fg = PropKey::BorderForeground;
        let bg = PropKey::BorderBackground;
        EdgeColors {
            foreground: Sides::new(
                pick(PropKey::BorderTopForeground, fg),
                pick(PropKey::BorderRightForeground, fg),
                pick(PropKey::BorderBottomForeground, fg),
                pick(PropKey::BorderLeftForeground, fg),
            ),
            background: Sides::new(
                pick(PropKey::BorderTopBackground, bg),
                pick(PropKey::BorderRightBackground, bg),
                pick(PropKey::BorderBottomBackground, bg),
                pick(PropKey::BorderLeftBackground, bg),
            ),
        }
    }

    /// Width of left and right padding together.
    pub fn get_horizontal_padding(&self) -> usize {
        let p = self.get_padding();
        usize::from(p.left) + usize::from(p.right)
    }

    /// Width of left and right border edges together.
    pub fn get_horizontal_border_size(&self) -> usize {
        let edges = self.get_border_edges();
        let border = self.get_border_style();
        let side = |on: bool, size: usize| if on { size.max(1) } else { 0 };
        side(edges.left, border.left_size()) + side(edges.right, border.right_size())
    }

    /// Horizontal space taken by padding, border and margin.
    pub fn get_horizontal_frame_size(&self) -> usize {
        let m = self.get_margin();
        self.get_horizontal_padding()
            + self.get_horizontal_border_size()
            + usize::from(m.left)
            + usize::from(m.right)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_all(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_style_builder() {
        let s = Style::new().bold(true).foreground(Color::Basic(1));
        assert!(s.get_bold());
        assert!(s.is_set(PropKey::Foreground));
        assert_eq!(s.get_foreground(), Color::Basic(1));
    }

    #[test]
    fn test_set_get_unset() {
        let s = Style::new();
        assert!(s.get(PropKey::Width).is_none());
        let s = s.set(Property::Width(7));
        assert_eq!(s.get(PropKey::Width), Some(&Property::Width(7)));
        let s = s.unset(PropKey::Width);
        assert!(s.get(PropKey::Width).is_none());
    }

    #[test]
    fn test_explicit_false_is_set() {
        let s = Style::new().bold(false);
        assert!(s.is_set(PropKey::Bold));
        assert!(!s.get_bold());
    }

    #[test]
    fn test_padding_shorthand() {
        let s = Style::new().padding(&[2]).unwrap();
        assert_eq!(s.get_padding(), Sides::all(2));

        let s = Style::new().padding(&[1, 2]).unwrap();
        assert_eq!(s.get_padding(), Sides::new(1, 2, 1, 2));

        let s = Style::new().margin(&[1, 2, 3]).unwrap();
        assert_eq!(s.get_margin(), Sides::new(1, 2, 3, 2));
    }

    #[test]
    fn test_padding_wrong_count() {
        let err = Style::new().padding(&[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { what: "padding", .. }));
        assert!(Style::new().margin(&[]).is_err());
    }

    #[test]
    fn test_inherit_skips_spacing() {
        let parent = Style::new()
            .bold(true)
            .italic(true)
            .foreground(Color::Basic(2))
            .padding(&[3])
            .unwrap()
            .margin_background(Color::Basic(4));
        let child = Style::new().italic(false).padding_left(1).inherit(&parent);

        assert!(child.get_bold());
        assert!(!child.get_italic());
        assert_eq!(child.get_foreground(), Color::Basic(2));
        assert_eq!(child.get_padding(), Sides::new(0, 0, 0, 1));
        assert!(!child.is_set(PropKey::PaddingTop));
        assert!(!child.is_set(PropKey::MarginBackground));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Style::new().width(10);
        let b = a.copy().width(20);
        assert_eq!(a.get_width(), 10);
        assert_eq!(b.get_width(), 20);
    }

    #[test]
    fn test_border_edges_implicit_all() {
        let s = Style::new().border(Border::rounded());
        assert!(s.get_border_edges().is_all());

        let s = Style::new().border(Border::rounded()).border_top(true);
        assert_eq!(
            s.get_border_edges(),
            BorderEdges {
                top: true,
                ..BorderEdges::none()
            }
        );

        let s = Style::new().border_left(true);
        assert_eq!(s.get_border_style(), Border::normal());
        assert!(s.get_border_edges().left);

        assert!(!Style::new().get_border_edges().any());
    }

    #[test]
    fn test_border_color_precedence() {
        let s = Style::new()
            .border_foreground(Color::Basic(1))
            .border_left_foreground(Color::Basic(2));
        let colors = s.get_border_colors();
        assert_eq!(colors.foreground.top, Color::Basic(1));
        assert_eq!(colors.foreground.left, Color::Basic(2));
        assert_eq!(colors.background.top, Color::Absent);
    }

    #[test]
    fn test_spaces_flags_fall_back() {
        let s = Style::new().underline(true);
        assert!(s.get_underline_spaces());
        let s = s.underline_spaces(false);
        assert!(!s.get_underline_spaces());
        assert!(!Style::new().get_strikethrough_spaces());
    }

    #[test]
    fn test_frame_size() {
        let s = Style::new()
            .padding(&[0, 2])
            .unwrap()
            .border(Border::normal())
            .margin_left(1);
        assert_eq!(s.get_horizontal_frame_size(), 7);
    }

    #[test]
    fn test_tab_width_default() {
        assert_eq!(Style::new().get_tab_width(), DEFAULT_TAB_WIDTH);
        assert_eq!(Style::new().tab_width(-1).get_tab_width(), -1);
    }
}
