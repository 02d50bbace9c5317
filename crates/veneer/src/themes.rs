//! Built-in color palettes.
//!
//! Each palette is a plain struct of [`Color`] fields, so entries can be
//! passed straight to style setters:
//!
//! ```rust
//! use veneer::{themes, Style};
//!
//! let mocha = themes::catppuccin_mocha();
//! let style = Style::new()
//!     .foreground(mocha.mauve.clone())
//!     .background(mocha.base.clone());
//! assert_eq!(style.get_foreground(), mocha.mauve);
//! ```

use crate::color::Color;

const fn hex(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Declares a palette struct, its constructor and a named listing.
macro_rules! palette {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident {
            $($(#[$field_meta:meta])* $field:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: Color,)+
        }

        impl $name {
            /// Every entry with its field name, in declaration order.
            pub fn entries(&self) -> Vec<(&'static str, &Color)> {
                vec![$((stringify!($field), &self.$field),)+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $ctor()
            }
        }

        #[doc = concat!("The [`", stringify!($name), "`] palette.")]
        pub const fn $ctor() -> $name {
            $name {
                $($field: hex($value),)+
            }
        }
    };
}

palette! {
    /// Catppuccin Mocha, the dark pastel flavor.
    ///
    /// Surfaces run from `crust` (darkest) to `surface2`; text from
    /// `subtext0` to `text`.
    /// <https://catppuccin.com>
    CatppuccinMocha, catppuccin_mocha {
        crust = 0x11111b,
        mantle = 0x181825,
        base = 0x1e1e2e,
        surface0 = 0x313244,
        surface1 = 0x45475a,
        surface2 = 0x585b70,
        overlay0 = 0x6c7086,
        overlay1 = 0x7f849c,
        overlay2 = 0x9399b2,
        subtext0 = 0xa6adc8,
        subtext1 = 0xbac2de,
        text = 0xcdd6f4,
        lavender = 0xb4befe,
        blue = 0x89b4fa,
        sapphire = 0x74c7ec,
        sky = 0x89dceb,
        teal = 0x94e2d5,
        green = 0xa6e3a1,
        yellow = 0xf9e2af,
        peach = 0xfab387,
        maroon = 0xeba0ac,
        red = 0xf38ba8,
        mauve = 0xcba6f7,
        pink = 0xf5c2e7,
        flamingo = 0xf2cdcd,
        rosewater = 0xf5e0dc,
    }
}

palette! {
    /// Dracula.
    /// <https://draculatheme.com>
    Dracula, dracula {
        background = 0x282a36,
        current_line = 0x44475a,
        foreground = 0xf8f8f2,
        comment = 0x6272a4,
        cyan = 0x8be9fd,
        green = 0x50fa7b,
        orange = 0xffb86c,
        pink = 0xff79c6,
        purple = 0xbd93f9,
        red = 0xff5555,
        yellow = 0xf1fa8c,
    }
}

palette! {
    /// The Gleam language brand colors.
    /// <https://gleam.run/branding/>
    Gleam, gleam {
        /// The signature pink.
        faff_pink = 0xffaff3,
        blue = 0xa6f0fc,
        aged_plastic_yellow = 0xfffbe8,
        unexpected_aubergine = 0x584355,
        underwater_blue = 0x292d3e,
        charcoal = 0x2f2f2f,
        black = 0x1e1e1e,
        blacker = 0x151515,
        white = 0xfefefc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Literal, Rgb};
    use crate::{ColorProfile, Style};

    fn as_hex(c: &Color) -> String {
        match c {
            Color::Literal(lit @ Literal::Hex(_)) => lit.to_string(),
            other => panic!("palette entry is not a hex literal: {other:?}"),
        }
    }

    #[test]
    fn test_catppuccin_mocha_spot_check() {
        let mocha = catppuccin_mocha();
        assert_eq!(as_hex(&mocha.base), "#1e1e2e");
        assert_eq!(as_hex(&mocha.mauve), "#cba6f7");
        assert_eq!(as_hex(&mocha.rosewater), "#f5e0dc");
        assert_eq!(mocha.entries().len(), 26);
    }

    #[test]
    fn test_dracula_spot_check() {
        let d = dracula();
        assert_eq!(d.background, Color::rgb(0x28, 0x2a, 0x36));
        assert_eq!(as_hex(&d.purple), "#bd93f9");
        assert_eq!(as_hex(&d.red), "#ff5555");
        assert_eq!(d.entries().len(), 11);
    }

    #[test]
    fn test_gleam_spot_check() {
        let g = gleam();
        assert_eq!(as_hex(&g.faff_pink), "#ffaff3");
        assert_eq!(as_hex(&g.blacker), "#151515");
        assert_eq!(g.entries()[0].0, "faff_pink");
    }

    #[test]
    fn test_every_entry_is_a_valid_hex_literal() {
        let (m, d, g) = (catppuccin_mocha(), dracula(), gleam());
        let all = m.entries().into_iter().chain(d.entries()).chain(g.entries());
        for (name, color) in all {
            let text = as_hex(color);
            assert_eq!(text.len(), 7, "{name}");
            assert_eq!(Color::parse(&text).as_ref(), Ok(color), "{name}");
        }
    }

    #[test]
    fn test_palette_in_style() {
        let mocha = catppuccin_mocha();
        let out = Style::new()
            .foreground(mocha.mauve.clone())
            .background(mocha.base.clone())
            .render_with(&["hi"], ColorProfile::TrueColor, true);
        assert_eq!(
            out,
            "\x1b[38;2;203;166;247m\x1b[48;2;30;30;46mhi\x1b[0m"
        );
        assert!(matches!(
            dracula().pink,
            Color::Literal(Literal::Hex(Rgb { r: 0xff, g: 0x79, b: 0xc6 }))
        ));
    }

    #[test]
    fn test_default_matches_constructor() {
        assert_eq!(Gleam::default(), gleam());
        assert_eq!(Dracula::default(), dracula());
    }
}
