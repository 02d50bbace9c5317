//! Joining rendered blocks side by side or on top of each other.

use crate::metrics::{visible_width, width};
use crate::position::Position;

/// Horizontally joins multi-line strings along a vertical axis.
///
/// Shorter blocks get blank rows distributed by `pos`:
/// - `Position::TOP` (0.0): content sticks to the top
/// - `Position::CENTER` (0.5): centered
/// - `Position::BOTTOM` (1.0): content sticks to the bottom
///
/// # Example
///
/// ```rust
/// use veneer::{join_horizontal, Position};
///
/// let left = "Line 1\nLine 2\nLine 3";
/// let right = "A\nB";
/// let combined = join_horizontal(Position::TOP, &[left, right]);
/// assert_eq!(combined, "Line 1A\nLine 2B\nLine 3 ");
/// ```
pub fn join_horizontal(pos: Position, strs: &[&str]) -> String {
    if strs.is_empty() {
        return String::new();
    }
    if strs.len() == 1 {
        return strs[0].to_string();
    }

    let blocks: Vec<Vec<&str>> = strs.iter().map(|s| s.split('\n').collect()).collect();
    let widths: Vec<usize> = strs.iter().map(|s| width(s)).collect();
    let max_height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let offsets: Vec<usize> = blocks
        .iter()
        .map(|block| pos.split(max_height - block.len()).0)
        .collect();

    let total_width: usize = widths.iter().sum();
    let mut result = String::with_capacity(max_height * (total_width + 1));

    for row in 0..max_height {
        if row > 0 {
            result.push('\n');
        }
        for ((block, &block_width), &top) in blocks.iter().zip(&widths).zip(&offsets) {
            let content = row
                .checked_sub(top)
                .and_then(|r| block.get(r).copied())
                .unwrap_or("");
            result.push_str(content);
            let pad = block_width.saturating_sub(visible_width(content));
            result.extend(std::iter::repeat_n(' ', pad));
        }
    }

    result
}

/// Vertically joins multi-line strings along a horizontal axis.
///
/// Narrower lines get spaces distributed by `pos`:
/// - `Position::LEFT` (0.0): flush left
/// - `Position::CENTER` (0.5): centered, extra space on the left
/// - `Position::RIGHT` (1.0): flush right
///
/// # Example
///
/// ```rust
/// use veneer::{join_vertical, Position};
///
/// let combined = join_vertical(Position::CENTER, &["hi", "there"]);
/// assert_eq!(combined, "  hi \nthere");
/// ```
pub fn join_vertical(pos: Position, strs: &[&str]) -> String {
    if strs.is_empty() {
        return String::new();
    }
    if strs.len() == 1 {
        return strs[0].to_string();
    }

    let max_width = strs.iter().map(|s| width(s)).max().unwrap_or(0);

    let mut lines = Vec::new();
    for s in strs {
        for line in s.split('\n') {
            let (left, right) = pos.split_leading(max_width - visible_width(line));
            lines.push(format!("{}{line}{}", " ".repeat(left), " ".repeat(right)));
        }
    }
    lines.join("\n")
}
