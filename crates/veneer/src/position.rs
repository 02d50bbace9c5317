//! Position and alignment types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A position along one axis, from 0.0 (top/left) to 1.0 (bottom/right).
///
/// Values in between split extra space proportionally.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Position(f64);

impl Position {
    /// Align to the top.
    pub const TOP: Position = Position(0.0);
    /// Align to the bottom.
    pub const BOTTOM: Position = Position(1.0);
    /// Align to the center.
    pub const CENTER: Position = Position(0.5);
    /// Align to the left. Same factor as [`Position::TOP`].
    pub const LEFT: Position = Position(0.0);
    /// Align to the right. Same factor as [`Position::BOTTOM`].
    pub const RIGHT: Position = Position(1.0);

    /// Create a position from a factor, clamped to `0.0..=1.0`.
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            return Self::TOP;
        }
        Position(factor.clamp(0.0, 1.0))
    }

    /// The position as a factor in `0.0..=1.0`.
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Split `gap` cells into `(before, after)` so that content sits at this
    /// position. `before` is `gap - round(gap * (1 - p))`.
    pub fn split(self, gap: usize) -> (usize, usize) {
        let after = (gap as f64 * (1.0 - self.0)).round() as usize;
        let after = after.min(gap);
        (gap - after, after)
    }

    /// Split `gap` with the rounding applied to the leading share:
    /// `before` is `round(gap * p)`.
    pub fn split_leading(self, gap: usize) -> (usize, usize) {
        let before = (gap as f64 * self.0).round() as usize;
        let before = before.min(gap);
        (before, gap - before)
    }
}

impl From<f64> for Position {
    fn from(factor: f64) -> Self {
        Position::new(factor)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Factor(f64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Factor(f) => Ok(Position::new(f)),
            Repr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "top" => Ok(Position::TOP),
                "bottom" => Ok(Position::BOTTOM),
                "center" => Ok(Position::CENTER),
                "left" => Ok(Position::LEFT),
                "right" => Ok(Position::RIGHT),
                other => Err(serde::de::Error::custom(format!(
                    "unknown position '{other}'"
                ))),
            },
        }
    }
}

/// CSS-like sides specification for padding, margin, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Sides<T> {
    /// Create sides from individual values.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl<T: Copy> Sides<T> {
    /// Create sides with all values the same.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand 1-4 positional values clockwise from the top.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for any other count.
    pub fn from_shorthand(what: &'static str, values: &[T]) -> Result<Self> {
        match *values {
            [all] => Ok(Self::all(all)),
            [v, h] => Ok(Self::from((v, h))),
            [t, h, b] => Ok(Self::from((t, h, b))),
            [t, r, b, l] => Ok(Self::new(t, r, b, l)),
            _ => Err(Error::invalid_argument(
                what,
                format!("expected 1-4 values, got {}", values.len()),
            )),
        }
    }
}

// From implementations for CSS-like shorthand

impl<T: Copy> From<T> for Sides<T> {
    /// Single value: all sides.
    fn from(all: T) -> Self {
        Self::all(all)
    }
}

impl<T: Copy> From<(T, T)> for Sides<T> {
    /// Two values: (vertical, horizontal).
    fn from((vertical, horizontal): (T, T)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl<T: Copy> From<(T, T, T)> for Sides<T> {
    /// Three values: (top, horizontal, bottom).
    fn from((top, horizontal, bottom): (T, T, T)) -> Self {
        Self {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        }
    }
}

impl<T: Copy> From<(T, T, T, T)> for Sides<T> {
    /// Four values: (top, right, bottom, left) - clockwise.
    fn from((top, right, bottom, left): (T, T, T, T)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
