//! Named styles loaded from configuration text.
//!
//! A stylesheet is a map from style names to [`StyleDef`] records. Every
//! field is optional; a style may `extends` another by name and inherits
//! whatever it leaves unset.
//!
//! ```rust
//! use veneer::StyleSheet;
//!
//! let sheet = StyleSheet::from_toml(r##"
//! [base]
//! foreground = "#ff8800"
//! bold = true
//!
//! [title]
//! extends = "base"
//! padding = [0, 1]
//! border = "rounded"
//! "##).unwrap();
//!
//! let title = sheet.get("title").unwrap();
//! assert!(title.get_bold());
//! assert_eq!(title.get_padding().left, 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::border::Border;
use crate::color::Color;
use crate::error::Error as StyleError;
use crate::position::Position;
use crate::style::Style;

/// One style as written in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDef {
    /// Name of the style to inherit from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_whitespace: Option<bool>,

    /// CSS-style shorthand with 1 to 4 values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Vec<u16>>,
    /// CSS-style shorthand with 1 to 4 values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Vec<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_background: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_vertical: Option<Position>,

    /// Border preset name, such as `"rounded"` or `"double"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_background: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<i16>,
}

impl StyleDef {
    /// Build the style this record describes, ignoring `extends`.
    ///
    /// # Errors
    /// Returns an error for malformed padding or margin shorthand, or an
    /// unknown border preset.
    pub fn to_style(&self) -> Result<Style, StyleError> {
        let mut s = Style::new();

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = self.$field.clone() {
                        s = s.$field(v);
                    }
                )*
            };
        }

        apply!(
            foreground,
            background,
            bold,
            italic,
            underline,
            strikethrough,
            reverse,
            blink,
            faint,
            underline_spaces,
            strikethrough_spaces,
            color_whitespace,
            margin_background,
            width,
            height,
            max_width,
            max_height,
            align_vertical,
            border_top,
            border_right,
            border_bottom,
            border_left,
            border_foreground,
            border_background,
            inline,
            tab_width,
        );

        if let Some(p) = self.align {
            s = s.align_horizontal(p);
        }
        if let Some(values) = &self.padding {
            s = s.padding(values)?;
        }
        if let Some(values) = &self.margin {
            s = s.margin(values)?;
        }
        if let Some(name) = &self.border {
            let border = Border::by_name(name).ok_or_else(|| {
                StyleError::invalid_argument("border", format!("unknown preset '{name}'"))
            })?;
            s = s.border(border);
        }
        Ok(s)
    }
}

/// A resolved set of named styles.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl StyleSheet {
    /// Resolve a map of definitions, following `extends` chains.
    ///
    /// # Errors
    /// Returns `StyleSheetError` for unknown parents, inheritance cycles or
    /// invalid definitions.
    pub fn from_defs(defs: BTreeMap<String, StyleDef>) -> Result<Self, StyleSheetError> {
        let mut styles = BTreeMap::new();
        for name in defs.keys() {
            let mut visiting = BTreeSet::new();
            resolve(name, &defs, &mut styles, &mut visiting)?;
        }
        debug!(styles = styles.len(), "stylesheet loaded");
        Ok(Self { styles })
    }

    /// Load a stylesheet from JSON text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or resolution fails.
    pub fn from_json(json: &str) -> Result<Self, StyleSheetError> {
        Self::from_defs(serde_json::from_str(json)?)
    }

    /// Load a stylesheet from TOML text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or resolution fails.
    pub fn from_toml(toml: &str) -> Result<Self, StyleSheetError> {
        Self::from_defs(toml::from_str(toml)?)
    }

    /// Load a stylesheet from YAML text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or resolution fails.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleSheetError> {
        Self::from_defs(serde_yaml::from_str(yaml)?)
    }

    /// The style registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn resolve(
    name: &str,
    defs: &BTreeMap<String, StyleDef>,
    done: &mut BTreeMap<String, Style>,
    visiting: &mut BTreeSet<String>,
) -> Result<Style, StyleSheetError> {
    if let Some(style) = done.get(name) {
        return Ok(style.clone());
    }
    if !visiting.insert(name.to_string()) {
        return Err(StyleSheetError::InheritanceCycle(name.to_string()));
    }

    let def = defs
        .get(name)
        .ok_or_else(|| StyleSheetError::UnknownParent(name.to_string()))?;
    let mut style = def.to_style()?;
    if let Some(parent) = &def.extends {
        if !defs.contains_key(parent) {
            return Err(StyleSheetError::UnknownParent(parent.clone()));
        }
        let parent = resolve(parent, defs, done, visiting)?;
        style = style.inherit(&parent);
    }

    visiting.remove(name);
    done.insert(name.to_string(), style.clone());
    Ok(style)
}

/// Error loading a stylesheet.
#[derive(Error, Debug)]
pub enum StyleSheetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown parent style: {0}")]
    UnknownParent(String),
    #[error("Inheritance cycle through style: {0}")]
    InheritanceCycle(String),
    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Literal;

    #[test]
    fn test_from_json() {
        let sheet = StyleSheet::from_json(
            r##"{
                "warn": { "foreground": "#ff0000", "bold": true, "margin": [1, 2] },
                "plain": {}
            }"##,
        )
        .unwrap();
        assert_eq!(sheet.len(), 2);
        let warn = sheet.get("warn").unwrap();
        assert!(warn.get_bold());
        assert_eq!(warn.get_margin().right, 2);
        assert_eq!(
            warn.get_foreground(),
            Color::Literal(Literal::parse("#ff0000").unwrap())
        );
        assert!(sheet.get("missing").is_none());
    }

    #[test]
    fn test_extends_chain() {
        let sheet = StyleSheet::from_toml(
            r#"
            [a]
            italic = true
            padding = [2]

            [b]
            extends = "a"
            bold = true

            [c]
            extends = "b"
            italic = false
            "#,
        )
        .unwrap();
        let c = sheet.get("c").unwrap();
        assert!(c.get_bold());
        assert!(!c.get_italic());
        // padding is not inherited
        assert_eq!(c.get_padding().top, 0);
        assert_eq!(sheet.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_parent() {
        let err = StyleSheet::from_json(r#"{ "x": { "extends": "nope" } }"#).unwrap_err();
        assert!(matches!(err, StyleSheetError::UnknownParent(p) if p == "nope"));
    }

    #[test]
    fn test_inheritance_cycle() {
        let err = StyleSheet::from_json(
            r#"{ "x": { "extends": "y" }, "y": { "extends": "x" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, StyleSheetError::InheritanceCycle(_)));
    }

    #[test]
    fn test_invalid_definitions() {
        let err = StyleSheet::from_json(r#"{ "x": { "padding": [1, 2, 3, 4, 5] } }"#).unwrap_err();
        assert!(matches!(err, StyleSheetError::Style(_)));

        let err = StyleSheet::from_json(r#"{ "x": { "border": "wavy" } }"#).unwrap_err();
        assert!(matches!(err, StyleSheetError::Style(_)));

        let err = StyleSheet::from_json(r##"{ "x": { "colour": "#fff" } }"##).unwrap_err();
        assert!(matches!(err, StyleSheetError::Json(_)));

        let err = StyleSheet::from_json(r##"{ "x": { "foreground": "#zz" } }"##).unwrap_err();
        assert!(matches!(err, StyleSheetError::Json(_)));
    }

    #[test]
    fn test_def_to_style_border_and_alignment() {
        let def = StyleDef {
            border: Some("double".into()),
            align: Some(Position::CENTER),
            width: Some(10),
            ..StyleDef::default()
        };
        let s = def.to_style().unwrap();
        assert_eq!(s.get_border_style(), Border::double());
        assert_eq!(s.get_align_horizontal(), Position::CENTER);
        assert_eq!(s.get_width(), 10);
    }
}
