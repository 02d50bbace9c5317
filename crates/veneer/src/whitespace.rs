//! Fill options for the space that placement adds around content.

use std::sync::Arc;

use crate::border::{fill_edge, paint};
use crate::color::Color;
use crate::renderer::{default_renderer, Renderer};

/// How gap cells are drawn by the `place` functions.
///
/// # Example
///
/// ```rust
/// use veneer::{place_horizontal_with, Position, Whitespace};
///
/// let ws = Whitespace::new().chars(".");
/// assert_eq!(place_horizontal_with(5, Position::RIGHT, "hi", &ws), "...hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Whitespace {
    chars: String,
    foreground: Color,
    background: Color,
    renderer: Option<Arc<Renderer>>,
}

impl Whitespace {
    /// Plain spaces with no color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters cycled across each gap. Empty means spaces.
    pub fn chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = chars.into();
        self
    }

    /// Foreground of the fill characters.
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = color.into();
        self
    }

    /// Background of the gap cells.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    /// Renderer used to resolve the colors. Defaults to the process renderer.
    pub fn renderer(mut self, r: Arc<Renderer>) -> Self {
        self.renderer = Some(r);
        self
    }

    /// A run of `width` gap cells.
    pub fn render(&self, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let fill = fill_edge(&self.chars, width);
        if self.foreground.is_absent() && self.background.is_absent() {
            return fill;
        }
        let renderer = self.renderer.clone().unwrap_or_else(default_renderer);
        paint(
            &fill,
            &self.foreground,
            &self.background,
            renderer.color_profile(),
            renderer.has_dark_background(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorProfile;

    #[test]
    fn test_default_is_spaces() {
        assert_eq!(Whitespace::new().render(3), "   ");
        assert_eq!(Whitespace::new().render(0), "");
    }

    #[test]
    fn test_chars_cycle() {
        assert_eq!(Whitespace::new().chars("ab").render(5), "ababa");
        assert_eq!(Whitespace::new().chars("中").render(3), "中 ");
    }

    #[test]
    fn test_colored_fill() {
        let ws = Whitespace::new()
            .background(Color::Basic(4))
            .renderer(Arc::new(Renderer::fixed(ColorProfile::Ansi, true)));
        assert_eq!(ws.render(2), "\x1b[44m  \x1b[0m");

        let ascii = ws.renderer(Arc::new(Renderer::fixed(ColorProfile::Ascii, true)));
        assert_eq!(ascii.render(2), "  ");
    }
}
