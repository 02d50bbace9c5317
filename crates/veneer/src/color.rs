//! Colors and capability-tier resolution.
//!
//! A [`Color`] is a closed set of representations:
//! - [`Color::Absent`] - no color, the terminal default
//! - [`Color::Literal`] - a hex (`#ff0000`) or palette index (`196`) literal
//! - [`Color::Basic`] - one of the 16 standard colors
//! - [`Color::Adaptive`] - light/dark variants picked by background darkness
//! - [`Color::Explicit`] - hand-picked values per capability tier
//! - [`Color::AdaptiveExplicit`] - light/dark variants of explicit values
//!
//! Resolution turns a color into an escape fragment for a [`ColorProfile`].
//! Literals richer than the profile are degraded one tier at a time through
//! fixed palette tables; nothing survives at [`ColorProfile::Ascii`].
//!
//! # Example
//!
//! ```rust
//! use veneer::{Color, ColorProfile, Layer};
//!
//! let red = Color::parse("#FF0000").unwrap();
//! assert_eq!(
//!     red.resolve(ColorProfile::TrueColor, true, Layer::Foreground),
//!     "\x1b[38;2;255;0;0m"
//! );
//! assert_eq!(red.resolve(ColorProfile::Ansi, true, Layer::Foreground), "\x1b[31m");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Color capability tier of an output target, richest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorProfile {
    /// True color / 16 million colors (24-bit).
    #[default]
    TrueColor,
    /// 256 colors (8-bit).
    Ansi256,
    /// 16 ANSI colors (4-bit).
    Ansi,
    /// No color support.
    Ascii,
}

impl ColorProfile {
    /// Returns true if this profile can display colors of the given tier.
    pub fn supports(self, other: ColorProfile) -> bool {
        self <= other
    }

    /// The next poorer tier, or `None` at ASCII.
    pub fn degrade(self) -> Option<ColorProfile> {
        match self {
            ColorProfile::TrueColor => Some(ColorProfile::Ansi256),
            ColorProfile::Ansi256 => Some(ColorProfile::Ansi),
            ColorProfile::Ansi => Some(ColorProfile::Ascii),
            ColorProfile::Ascii => None,
        }
    }
}

/// Whether a color is applied to the glyph or behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color.
    Foreground,
    /// Cell background.
    Background,
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn distance_sq(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).unsigned_abs();
        let (dr, dg, db) = (d(self.r, other.r), d(self.g, other.g), d(self.b, other.b));
        dr * dr + dg * dg + db * db
    }
}

/// A single color literal: a hex triple or a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// `#RRGGBB` or `#RGB`. Native tier: true color.
    Hex(Rgb),
    /// Palette index. 0-15 are native to ANSI, 16-255 to ANSI256.
    Index(u8),
}

impl Literal {
    /// Parse `#RGB`, `#RRGGBB` or a decimal index in 0-255.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorLiteral`] for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim();
        let invalid = || Error::InvalidColorLiteral(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Literal::Hex(Rgb::new(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                ))),
                3 => Ok(Literal::Hex(Rgb::new(
                    channel(&hex[0..1])? * 17,
                    channel(&hex[1..2])? * 17,
                    channel(&hex[2..3])? * 17,
                ))),
                _ => Err(invalid()),
            };
        }

        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            return raw.parse::<u8>().map(Literal::Index).map_err(|_| invalid());
        }

        Err(invalid())
    }

    /// The poorest tier at which this literal can be emitted unchanged.
    pub fn native_profile(self) -> ColorProfile {
        match self {
            Literal::Hex(_) => ColorProfile::TrueColor,
            Literal::Index(n) if n >= 16 => ColorProfile::Ansi256,
            Literal::Index(_) => ColorProfile::Ansi,
        }
    }

    /// Escape fragment for this literal at `profile`.
    pub fn resolve(self, profile: ColorProfile, layer: Layer) -> String {
        match (self, profile) {
            (_, ColorProfile::Ascii) => String::new(),
            (Literal::Hex(rgb), ColorProfile::TrueColor) => sgr_rgb(rgb, layer),
            (Literal::Hex(rgb), _) => Literal::Index(rgb_to_ansi256(rgb)).resolve(profile, layer),
            (Literal::Index(n), _) if n < 16 => sgr_basic(n, layer),
            (Literal::Index(n), ColorProfile::TrueColor | ColorProfile::Ansi256) => {
                sgr_256(n, layer)
            }
            (Literal::Index(n), ColorProfile::Ansi) => {
                sgr_basic(ANSI256_TO_ANSI[n as usize], layer)
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Hex(Rgb { r, g, b }) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Literal::Index(n) => write!(f, "{n}"),
        }
    }
}

/// Hand-picked literals per capability tier. Missing tiers resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TierColors {
    /// Value used at [`ColorProfile::TrueColor`].
    pub true_color: Option<Literal>,
    /// Value used at [`ColorProfile::Ansi256`].
    pub ansi256: Option<Literal>,
    /// Value used at [`ColorProfile::Ansi`].
    pub ansi: Option<Literal>,
}

impl TierColors {
    /// Parse one literal per tier; empty strings leave the tier unset.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorLiteral`] if any non-empty value is malformed.
    pub fn parse(true_color: &str, ansi256: &str, ansi: &str) -> Result<Self> {
        let opt = |s: &str| {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                Literal::parse(s).map(Some)
            }
        };
        Ok(Self {
            true_color: opt(true_color)?,
            ansi256: opt(ansi256)?,
            ansi: opt(ansi)?,
        })
    }

    fn for_profile(&self, profile: ColorProfile) -> Option<Literal> {
        match profile {
            ColorProfile::TrueColor => self.true_color,
            ColorProfile::Ansi256 => self.ansi256,
            ColorProfile::Ansi => self.ansi,
            ColorProfile::Ascii => None,
        }
    }

    fn resolve(&self, profile: ColorProfile, layer: Layer) -> String {
        self.for_profile(profile)
            .map(|lit| lit.resolve(profile, layer))
            .unwrap_or_default()
    }
}

/// A terminal color description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorSpec", into = "ColorSpec")]
pub enum Color {
    /// No color; the terminal default is used.
    #[default]
    Absent,
    /// A hex or palette-index literal.
    Literal(Literal),
    /// One of the 16 standard colors (0-15).
    Basic(u8),
    /// Picks `light` or `dark` by background darkness.
    Adaptive { light: Literal, dark: Literal },
    /// Per-tier values with no conversion between tiers.
    Explicit(TierColors),
    /// Per-tier values for light and dark backgrounds.
    AdaptiveExplicit { light: TierColors, dark: TierColors },
}

impl Color {
    /// Parse a literal. The empty string means [`Color::Absent`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorLiteral`] for malformed literals.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Color::Absent);
        }
        Literal::parse(s).map(Color::Literal)
    }

    /// A true color literal.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Literal(Literal::Hex(Rgb::new(r, g, b)))
    }

    /// A palette index literal (0-255).
    pub const fn index(n: u8) -> Self {
        Color::Literal(Literal::Index(n))
    }

    /// One of the 16 standard colors.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `n` is above 15.
    pub fn basic(n: u8) -> Result<Self> {
        if n > 15 {
            return Err(Error::invalid_argument(
                "basic color",
                format!("index must be 0-15, got {n}"),
            ));
        }
        Ok(Color::Basic(n))
    }

    /// Light/dark pair of literals.
    ///
    /// # Errors
    /// Returns [`Error::InvalidColorLiteral`] if either literal is malformed.
    pub fn adaptive(light: &str, dark: &str) -> Result<Self> {
        Ok(Color::Adaptive {
            light: Literal::parse(light)?,
            dark: Literal::parse(dark)?,
        })
    }

    /// Per-tier values.
    pub const fn explicit(tiers: TierColors) -> Self {
        Color::Explicit(tiers)
    }

    /// Per-tier values for light and dark backgrounds.
    pub const fn adaptive_explicit(light: TierColors, dark: TierColors) -> Self {
        Color::AdaptiveExplicit { light, dark }
    }

    /// Returns true for [`Color::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Color::Absent)
    }

    /// Resolve to an escape fragment for the given tier and background.
    pub fn resolve(&self, profile: ColorProfile, dark_bg: bool, layer: Layer) -> String {
        match self {
            Color::Absent => String::new(),
            Color::Literal(lit) => lit.resolve(profile, layer),
            Color::Basic(n) => Literal::Index(*n).resolve(profile, layer),
            Color::Adaptive { light, dark } => {
                let lit = if dark_bg { dark } else { light };
                lit.resolve(profile, layer)
            }
            Color::Explicit(tiers) => tiers.resolve(profile, layer),
            Color::AdaptiveExplicit { light, dark } => {
                let tiers = if dark_bg { dark } else { light };
                tiers.resolve(profile, layer)
            }
        }
    }
}

impl From<Literal> for Color {
    fn from(lit: Literal) -> Self {
        Color::Literal(lit)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Literal(Literal::Hex(rgb))
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

// Serialized shape of a color in stylesheets.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TierSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    true_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ansi256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ansi: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Number(u8),
    Literal(String),
    AdaptiveExplicit { light: TierSpec, dark: TierSpec },
    Adaptive { light: String, dark: String },
    Explicit(TierSpec),
}

impl TryFrom<TierSpec> for TierColors {
    type Error = Error;

    fn try_from(spec: TierSpec) -> Result<Self> {
        TierColors::parse(
            spec.true_color.as_deref().unwrap_or_default(),
            spec.ansi256.as_deref().unwrap_or_default(),
            spec.ansi.as_deref().unwrap_or_default(),
        )
    }
}

impl From<TierColors> for TierSpec {
    fn from(tiers: TierColors) -> Self {
        Self {
            true_color: tiers.true_color.map(|l| l.to_string()),
            ansi256: tiers.ansi256.map(|l| l.to_string()),
            ansi: tiers.ansi.map(|l| l.to_string()),
        }
    }
}

impl TryFrom<ColorSpec> for Color {
    type Error = Error;

    fn try_from(spec: ColorSpec) -> Result<Self> {
        match spec {
            ColorSpec::Number(n) if n < 16 => Ok(Color::Basic(n)),
            ColorSpec::Number(n) => Ok(Color::index(n)),
            ColorSpec::Literal(s) => Color::parse(&s),
            ColorSpec::Adaptive { light, dark } => Color::adaptive(&light, &dark),
            ColorSpec::Explicit(tiers) => Ok(Color::Explicit(tiers.try_into()?)),
            ColorSpec::AdaptiveExplicit { light, dark } => Ok(Color::AdaptiveExplicit {
                light: light.try_into()?,
                dark: dark.try_into()?,
            }),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        match color {
            Color::Absent => ColorSpec::Literal(String::new()),
            Color::Literal(lit) => ColorSpec::Literal(lit.to_string()),
            Color::Basic(n) => ColorSpec::Number(n),
            Color::Adaptive { light, dark } => ColorSpec::Adaptive {
                light: light.to_string(),
                dark: dark.to_string(),
            },
            Color::Explicit(tiers) => ColorSpec::Explicit(tiers.into()),
            Color::AdaptiveExplicit { light, dark } => ColorSpec::AdaptiveExplicit {
                light: light.into(),
                dark: dark.into(),
            },
        }
    }
}

// Escape builders

fn sgr_rgb(rgb: Rgb, layer: Layer) -> String {
    let base = match layer {
        Layer::Foreground => 38,
        Layer::Background => 48,
    };
    format!("\x1b[{base};2;{};{};{}m", rgb.r, rgb.g, rgb.b)
}

fn sgr_256(n: u8, layer: Layer) -> String {
    let base = match layer {
        Layer::Foreground => 38,
        Layer::Background => 48,
    };
    format!("\x1b[{base};5;{n}m")
}

fn sgr_basic(n: u8, layer: Layer) -> String {
    let code = match (layer, n < 8) {
        (Layer::Foreground, true) => 30 + u16::from(n),
        (Layer::Foreground, false) => 90 + u16::from(n) - 8,
        (Layer::Background, true) => 40 + u16::from(n),
        (Layer::Background, false) => 100 + u16::from(n) - 8,
    };
    format!("\x1b[{code}m")
}

// Tier conversion

/// Channel levels of the 6x6x6 cube in the 256-color palette.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Nearest 256-palette index for a true color value.
///
/// Candidates are the nearest cube cell and the nearest grayscale ramp step;
/// ties go to the cube.
pub fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    let level = |v: u8| -> usize {
        if v < 48 {
            0
        } else if v < 115 {
            1
        } else {
            (usize::from(v) - 35) / 40
        }
    };
    let (ri, gi, bi) = (level(rgb.r), level(rgb.g), level(rgb.b));
    let cube = Rgb::new(CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);

    let average = (usize::from(rgb.r) + usize::from(rgb.g) + usize::from(rgb.b)) / 3;
    let gray_idx = if average > 238 {
        23
    } else {
        average.saturating_sub(3) / 10
    };
    let gv = (8 + 10 * gray_idx) as u8;
    let gray = Rgb::new(gv, gv, gv);

    if rgb.distance_sq(cube) <= rgb.distance_sq(gray) {
        (16 + 36 * ri + 6 * gi + bi) as u8
    } else {
        (232 + gray_idx) as u8
    }
}

/// Down-conversion from the 256-color palette to the 16 standard colors.
///
/// This is fixed data: it is emitted as stored and never recomputed from a
/// distance metric. Indices 0-15 map to themselves. Cube and gray entries map
/// to a normal-intensity hue (0-7), to bright black (8) for mid grays, or to
/// bright white (15) for the lightest cells. Bright hues 9-14 are never a
/// target, so 196 (pure red) degrades to 1 and 21 (pure blue) to 4.
pub const ANSI256_TO_ANSI: [u8; 256] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    0, 4, 4, 4, 4, 4, 2, 6, 6, 6, 4, 4, 2, 6, 6, 6, //
    6, 6, 2, 6, 6, 6, 6, 6, 2, 2, 6, 6, 6, 6, 2, 2, //
    6, 6, 6, 6, 1, 5, 5, 5, 4, 4, 3, 8, 8, 8, 4, 4, //
    3, 8, 8, 7, 6, 6, 3, 8, 7, 7, 6, 6, 2, 2, 6, 6, //
    6, 6, 2, 2, 6, 6, 6, 6, 1, 5, 5, 5, 5, 5, 3, 8, //
    8, 7, 5, 5, 3, 8, 7, 7, 7, 7, 3, 7, 7, 7, 7, 7, //
    3, 3, 7, 7, 7, 7, 3, 3, 7, 7, 7, 7, 1, 5, 5, 5, //
    5, 5, 3, 8, 7, 7, 5, 5, 3, 7, 7, 7, 7, 7, 3, 7, //
    7, 7, 7, 7, 3, 3, 7, 7, 7, 7, 3, 3, 7, 7, 7, 15, //
    1, 1, 5, 5, 5, 5, 1, 1, 5, 5, 5, 5, 3, 3, 7, 7, //
    7, 7, 3, 3, 7, 7, 7, 7, 3, 3, 7, 7, 7, 15, 3, 3, //
    7, 7, 15, 15, 1, 1, 5, 5, 5, 5, 1, 1, 5, 5, 5, 5, //
    3, 3, 7, 7, 7, 7, 3, 3, 7, 7, 7, 15, 3, 3, 7, 7, //
    15, 15, 3, 3, 7, 15, 15, 15, 0, 0, 0, 0, 0, 0, 8, 8, //
    8, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 15, 15, 15, //
];

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Layer = Layer::Foreground;
    const BG: Layer = Layer::Background;

    #[test]
    fn test_ansi256_table_shape() {
        for n in 0..16u8 {
            assert_eq!(ANSI256_TO_ANSI[n as usize], n);
        }
        for (n, &target) in ANSI256_TO_ANSI.iter().enumerate().skip(16) {
            assert!(!(9..=14).contains(&target), "{n} -> {target}");
        }
        assert_eq!(ANSI256_TO_ANSI[21], 4);
        assert_eq!(ANSI256_TO_ANSI[46], 2);
        assert_eq!(ANSI256_TO_ANSI[196], 1);
        assert_eq!(ANSI256_TO_ANSI[231], 15);
        assert_eq!(ANSI256_TO_ANSI[232], 0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            Literal::parse("#ff0000"),
            Ok(Literal::Hex(Rgb::new(255, 0, 0)))
        );
        assert_eq!(Literal::parse("#0f0"), Ok(Literal::Hex(Rgb::new(0, 255, 0))));
        assert_eq!(Literal::parse("196"), Ok(Literal::Index(196)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["#12", "#gggggg", "256", "red", "-1", "#1234567"] {
            assert_eq!(
                Color::parse(bad),
                Err(Error::InvalidColorLiteral(bad.to_string())),
                "{bad}"
            );
        }
        assert_eq!(Color::parse(""), Ok(Color::Absent));
    }

    #[test]
    fn test_hex_per_tier() {
        let red = Color::parse("#FF0000").unwrap();
        assert_eq!(red.resolve(ColorProfile::TrueColor, true, FG), "\x1b[38;2;255;0;0m");
        assert_eq!(red.resolve(ColorProfile::Ansi256, true, FG), "\x1b[38;5;196m");
        assert_eq!(red.resolve(ColorProfile::Ansi, true, FG), "\x1b[31m");
        assert_eq!(red.resolve(ColorProfile::Ascii, true, FG), "");
        assert_eq!(red.resolve(ColorProfile::TrueColor, true, BG), "\x1b[48;2;255;0;0m");
    }

    #[test]
    fn test_index_per_tier() {
        assert_eq!(Color::index(200).resolve(ColorProfile::TrueColor, true, FG), "\x1b[38;5;200m");
        assert_eq!(Color::index(1).resolve(ColorProfile::TrueColor, true, FG), "\x1b[31m");
        assert_eq!(Color::index(9).resolve(ColorProfile::Ansi, true, FG), "\x1b[91m");
        assert_eq!(Color::index(9).resolve(ColorProfile::Ansi, true, BG), "\x1b[101m");
        assert_eq!(Color::index(200).resolve(ColorProfile::Ansi, true, FG), "\x1b[35m");
    }

    #[test]
    fn test_adaptive_picks_by_darkness() {
        let c = Color::adaptive("0", "15").unwrap();
        assert_eq!(c.resolve(ColorProfile::TrueColor, true, FG), "\x1b[97m");
        assert_eq!(c.resolve(ColorProfile::TrueColor, false, FG), "\x1b[30m");
    }

    #[test]
    fn test_explicit_lookup_without_conversion() {
        let tiers = TierColors::parse("#FF0000", "196", "1").unwrap();
        let c = Color::explicit(tiers);
        assert_eq!(c.resolve(ColorProfile::TrueColor, true, FG), "\x1b[38;2;255;0;0m");
        assert_eq!(c.resolve(ColorProfile::Ansi256, true, FG), "\x1b[38;5;196m");
        assert_eq!(c.resolve(ColorProfile::Ansi, true, FG), "\x1b[31m");
        assert_eq!(c.resolve(ColorProfile::Ascii, true, FG), "");

        let partial = Color::explicit(TierColors::parse("#FF0000", "", "").unwrap());
        assert_eq!(partial.resolve(ColorProfile::Ansi256, true, FG), "");
    }

    #[test]
    fn test_adaptive_explicit() {
        let c = Color::adaptive_explicit(
            TierColors::parse("#000000", "0", "0").unwrap(),
            TierColors::parse("#FFFFFF", "15", "7").unwrap(),
        );
        assert_eq!(c.resolve(ColorProfile::TrueColor, true, FG), "\x1b[38;2;255;255;255m");
        assert_eq!(c.resolve(ColorProfile::TrueColor, false, FG), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn test_basic_range() {
        assert_eq!(Color::basic(3), Ok(Color::Basic(3)));
        assert!(matches!(Color::basic(16), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb::new(128, 128, 128)), 244);
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 255, 255)), 231);
    }

    #[test]
    fn test_profile_order() {
        assert!(ColorProfile::TrueColor.supports(ColorProfile::Ansi256));
        assert!(ColorProfile::Ansi256.supports(ColorProfile::Ansi));
        assert!(!ColorProfile::Ansi.supports(ColorProfile::TrueColor));
        assert_eq!(ColorProfile::Ansi.degrade(), Some(ColorProfile::Ascii));
        assert_eq!(ColorProfile::Ascii.degrade(), None);
    }

    #[test]
    fn test_serde_shapes() {
        let c: Color = serde_json::from_str("\"#ff00ff\"").unwrap();
        assert_eq!(c, Color::rgb(255, 0, 255));

        let c: Color = serde_json::from_str("3").unwrap();
        assert_eq!(c, Color::Basic(3));

        let c: Color = serde_json::from_str(r#"{"light":"0","dark":"15"}"#).unwrap();
        assert_eq!(c, Color::adaptive("0", "15").unwrap());

        let c: Color = serde_json::from_str(r##"{"true_color":"#ff0000","ansi":"1"}"##).unwrap();
        assert_eq!(
            c,
            Color::explicit(TierColors::parse("#ff0000", "", "1").unwrap())
        );

        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());

        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
    }
}
