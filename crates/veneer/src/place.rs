//! Placing a block inside a larger box.
//!
//! Placement never shrinks content: a dimension that already meets the
//! target is left alone.

use crate::metrics::{height, visible_width, width};
use crate::position::Position;
use crate::whitespace::Whitespace;

/// Place a string at a position within a given width and height.
///
/// # Example
///
/// ```rust
/// use veneer::{place, Position};
///
/// let placed = place(5, 3, Position::CENTER, Position::CENTER, "x");
/// assert_eq!(placed, "     \n  x  \n     ");
/// ```
pub fn place(width: usize, height: usize, h_pos: Position, v_pos: Position, s: &str) -> String {
    place_with(width, height, h_pos, v_pos, s, &Whitespace::default())
}

/// [`place`] with custom gap filling.
pub fn place_with(
    width: usize,
    height: usize,
    h_pos: Position,
    v_pos: Position,
    s: &str,
    ws: &Whitespace,
) -> String {
    let horizontal = place_horizontal_with(width, h_pos, s, ws);
    place_vertical_with(height, v_pos, &horizontal, ws)
}

/// Place a string horizontally within `width` cells.
pub fn place_horizontal(width: usize, pos: Position, s: &str) -> String {
    place_horizontal_with(width, pos, s, &Whitespace::default())
}

/// [`place_horizontal`] with custom gap filling.
pub fn place_horizontal_with(target: usize, pos: Position, s: &str, ws: &Whitespace) -> String {
    if width(s) >= target {
        return s.to_string();
    }

    s.split('\n')
        .map(|line| {
            let (left, right) = pos.split(target - visible_width(line));
            format!("{}{line}{}", ws.render(left), ws.render(right))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Place a string vertically within `height` rows.
pub fn place_vertical(height: usize, pos: Position, s: &str) -> String {
    place_vertical_with(height, pos, s, &Whitespace::default())
}

/// [`place_vertical`] with custom gap filling.
pub fn place_vertical_with(target: usize, pos: Position, s: &str, ws: &Whitespace) -> String {
    let content_height = height(s);
    if content_height >= target {
        return s.to_string();
    }

    let (top, bottom) = pos.split(target - content_height);
    let blank = ws.render(width(s));

    let mut rows: Vec<&str> = Vec::with_capacity(target);
    rows.extend(std::iter::repeat_n(blank.as_str(), top));
    rows.extend(s.split('\n'));
    rows.extend(std::iter::repeat_n(blank.as_str(), bottom));
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_center() {
        let out = place(10, 3, Position::CENTER, Position::CENTER, "x");
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], " ".repeat(10));
        assert_eq!(rows[1], "    x     ");
        assert_eq!(rows[2], " ".repeat(10));
    }

    #[test]
    fn test_place_never_shrinks() {
        assert_eq!(place(2, 1, Position::CENTER, Position::CENTER, "hello"), "hello");
        assert_eq!(place_vertical(1, Position::BOTTOM, "a\nb"), "a\nb");
    }

    #[test]
    fn test_place_horizontal() {
        assert_eq!(place_horizontal(5, Position::LEFT, "hi"), "hi   ");
        assert_eq!(place_horizontal(5, Position::RIGHT, "hi"), "   hi");
        assert_eq!(place_horizontal(4, Position::RIGHT, "a\nbb"), "   a\n  bb");
    }

    #[test]
    fn test_place_vertical() {
        assert_eq!(place_vertical(3, Position::TOP, "ab"), "ab\n  \n  ");
        assert_eq!(place_vertical(3, Position::BOTTOM, "ab"), "  \n  \nab");
    }

    #[test]
    fn test_place_with_fill_chars() {
        let ws = Whitespace::new().chars("·");
        let out = place_with(3, 2, Position::RIGHT, Position::BOTTOM, "x", &ws);
        assert_eq!(out, "···\n··x");
    }
}
