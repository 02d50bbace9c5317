//! Style properties.
//!
//! Every independently settable style attribute is one [`Property`] variant,
//! named by a [`PropKey`]. A [`PropertySet`] maps keys to values; a key that
//! is absent from the set is unset.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::border::Border;
use crate::color::Color;
use crate::position::Position;

/// A text transform applied as the last step of rendering.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Wrap a transform function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the transform.
    pub fn apply(&self, s: &str) -> String {
        (self.0)(s)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

macro_rules! properties {
    ($( $(#[$doc:meta])* $name:ident($ty:ty) ),* $(,)?) => {
        /// Names a style property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum PropKey {
            $( $(#[$doc])* $name, )*
        }

        /// A style property together with its value.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Property {
            $( $(#[$doc])* $name($ty), )*
        }

        impl Property {
            /// The key this property is stored under.
            pub fn key(&self) -> PropKey {
                match self {
                    $( Property::$name(_) => PropKey::$name, )*
                }
            }
        }

        impl PropKey {
            /// Every key, in storage order.
            pub const ALL: &'static [PropKey] = &[ $( PropKey::$name, )* ];
        }
    };
}

properties! {
    /// Text color.
    Foreground(Color),
    /// Cell background color.
    Background(Color),

    /// Bold text.
    Bold(bool),
    /// Italic text.
    Italic(bool),
    /// Underlined text.
    Underline(bool),
    /// Struck-through text.
    Strikethrough(bool),
    /// Swapped foreground and background.
    Reverse(bool),
    /// Blinking text.
    Blink(bool),
    /// Dim text.
    Faint(bool),

    /// Blank rows above the content.
    PaddingTop(u16),
    /// Blank columns right of the content.
    PaddingRight(u16),
    /// Blank rows below the content.
    PaddingBottom(u16),
    /// Blank columns left of the content.
    PaddingLeft(u16),

    /// Blank rows above the border.
    MarginTop(u16),
    /// Blank columns right of the border.
    MarginRight(u16),
    /// Blank rows below the border.
    MarginBottom(u16),
    /// Blank columns left of the border.
    MarginLeft(u16),
    /// Background of the margin area.
    MarginBackground(Color),

    /// Block width, padding included.
    Width(u16),
    /// Block height, padding included.
    Height(u16),
    /// Hard cap on line width.
    MaxWidth(u16),
    /// Hard cap on line count.
    MaxHeight(u16),

    /// Border glyph set.
    BorderStyle(Border),
    /// Draw the top edge.
    BorderTop(bool),
    /// Draw the right edge.
    BorderRight(bool),
    /// Draw the bottom edge.
    BorderBottom(bool),
    /// Draw the left edge.
    BorderLeft(bool),

    /// Border foreground on every edge.
    BorderForeground(Color),
    /// Top edge foreground.
    BorderTopForeground(Color),
    /// Right edge foreground.
    BorderRightForeground(Color),
    /// Bottom edge foreground.
    BorderBottomForeground(Color),
    /// Left edge foreground.
    BorderLeftForeground(Color),

    /// Border background on every edge.
    BorderBackground(Color),
    /// Top edge background.
    BorderTopBackground(Color),
    /// Right edge background.
    BorderRightBackground(Color),
    /// Bottom edge background.
    BorderBottomBackground(Color),
    /// Left edge background.
    BorderLeftBackground(Color),

    /// Horizontal alignment within the width.
    AlignHorizontal(Position),
    /// Vertical alignment within the height.
    AlignVertical(Position),

    /// Single-line rendering without box decorations.
    Inline(bool),
    /// Spaces per tab. 0 removes tabs, negative keeps them.
    TabWidth(i16),
    /// Function run over the finished output.
    Transform(Transform),
    /// Paint alignment and padding whitespace with the background.
    ColorWhitespace(bool),
    /// Underline runs of spaces.
    UnderlineSpaces(bool),
    /// Strike through runs of spaces.
    StrikethroughSpaces(bool),
    /// Text rendered ahead of the arguments.
    LiteralString(String),
}

impl PropKey {
    /// Padding and margin keys. These are never inherited.
    pub fn is_spacing(self) -> bool {
        matches!(
            self,
            PropKey::PaddingTop
                | PropKey::PaddingRight
                | PropKey::PaddingBottom
                | PropKey::PaddingLeft
                | PropKey::MarginTop
                | PropKey::MarginRight
                | PropKey::MarginBottom
                | PropKey::MarginLeft
                | PropKey::MarginBackground
        )
    }
}

/// Mapping from property keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    map: BTreeMap<PropKey, Property>,
}

impl PropertySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a property, replacing any previous value under its key.
    pub fn insert(&mut self, prop: Property) {
        self.map.insert(prop.key(), prop);
    }

    /// Remove a key. Returns the value it held.
    pub fn remove(&mut self, key: PropKey) -> Option<Property> {
        self.map.remove(&key)
    }

    /// Look up a key.
    pub fn get(&self, key: PropKey) -> Option<&Property> {
        self.map.get(&key)
    }

    /// Returns true if `key` is set.
    pub fn contains(&self, key: PropKey) -> bool {
        self.map.contains_key(&key)
    }

    /// Number of set keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over set properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.map.values()
    }

    /// Value of a boolean property.
    pub fn flag(&self, key: PropKey) -> Option<bool> {
        match self.get(key)? {
            Property::Bold(v)
            | Property::Italic(v)
            | Property::Underline(v)
            | Property::Strikethrough(v)
            | Property::Reverse(v)
            | Property::Blink(v)
            | Property::Faint(v)
            | Property::BorderTop(v)
            | Property::BorderRight(v)
            | Property::BorderBottom(v)
            | Property::BorderLeft(v)
            | Property::Inline(v)
            | Property::ColorWhitespace(v)
            | Property::UnderlineSpaces(v)
            | Property::StrikethroughSpaces(v) => Some(*v),
            _ => None,
        }
    }

    /// Value of a color property.
    pub fn color(&self, key: PropKey) -> Option<&Color> {
        match self.get(key)? {
            Property::Foreground(c)
            | Property::Background(c)
            | Property::MarginBackground(c)
            | Property::BorderForeground(c)
            | Property::BorderTopForeground(c)
            | Property::BorderRightForeground(c)
            | Property::BorderBottomForeground(c)
            | Property::BorderLeftForeground(c)
            | Property::BorderBackground(c)
            | Property::BorderTopBackground(c)
            | Property::BorderRightBackground(c)
            | Property::BorderBottomBackground(c)
            | Property::BorderLeftBackground(c) => Some(c),
            _ => None,
        }
    }

    /// Value of a size property.
    pub fn size(&self, key: PropKey) -> Option<u16> {
        match self.get(key)? {
            Property::PaddingTop(n)
            | Property::PaddingRight(n)
            | Property::PaddingBottom(n)
            | Property::PaddingLeft(n)
            | Property::MarginTop(n)
            | Property::MarginRight(n)
            | Property::MarginBottom(n)
            | Property::MarginLeft(n)
            | Property::Width(n)
            | Property::Height(n)
            | Property::MaxWidth(n)
            | Property::MaxHeight(n) => Some(*n),
            _ => None,
        }
    }

    /// Value of an alignment property.
    pub fn position(&self, key: PropKey) -> Option<Position> {
        match self.get(key)? {
            Property::AlignHorizontal(p) | Property::AlignVertical(p) => Some(*p),
            _ => None,
        }
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for prop in iter {
            set.insert(prop);
        }
        set
    }
}
