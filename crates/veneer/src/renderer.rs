//! Terminal renderer with color profile detection.
//!
//! A [`Renderer`] is bound to one output target and caches two facts about
//! it: the color tier and whether the background is dark. Both are detected
//! at most once, on first use, from an injected [`Environment`].

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::debug;

use crate::color::ColorProfile;
use crate::style::Style;

/// Process-wide default renderer.
static DEFAULT_RENDERER: LazyLock<RwLock<Arc<Renderer>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Renderer::new(OutputTarget::Stdout))));

/// Terminal types known to support true color without advertising it.
const TRUE_COLOR_TERMS: &[&str] = &[
    "kitty", "alacritty", "wezterm", "ghostty", "foot", "contour",
];

/// Terminal type prefixes that support the 16 standard colors.
const ANSI_TERMS: &[&str] = &["xterm", "screen", "vt100", "linux", "rxvt", "tmux"];

/// Identity of the stream a renderer writes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputTarget {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// Any other sink, named by the caller. Never probed for interactivity.
    Custom(String),
}

/// Capability signals used for detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Color is disabled outright (`NO_COLOR`).
    pub no_color: bool,
    /// True color is forced (`COLORTERM=truecolor` or `24bit`).
    pub force_true_color: bool,
    /// Declared terminal type (`TERM`).
    pub term: Option<String>,
    /// Output goes to an interactive terminal.
    pub interactive: bool,
    /// Foreground/background hint (`COLORFGBG`, formatted `fg;bg`).
    pub color_fg_bg: Option<String>,
}

impl Environment {
    /// Read signals from the process environment for `target`.
    pub fn from_env(target: &OutputTarget) -> Self {
        let var = |name: &str| std::env::var(name).ok();
        let force_true_color = var("COLORTERM")
            .map(|v| {
                let v = v.to_ascii_lowercase();
                v == "truecolor" || v == "24bit"
            })
            .unwrap_or(false);

        Self {
            no_color: var("NO_COLOR").is_some_and(|v| !v.is_empty()),
            force_true_color,
            term: var("TERM"),
            interactive: is_interactive(target),
            color_fg_bg: var("COLORFGBG"),
        }
    }

    /// An interactive terminal of the given type with no other signals.
    pub fn terminal(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            interactive: true,
            ..Self::default()
        }
    }

    /// Decide the color tier these signals describe.
    pub fn color_profile(&self) -> ColorProfile {
        if self.no_color {
            return ColorProfile::Ascii;
        }
        if self.force_true_color {
            return ColorProfile::TrueColor;
        }
        if !self.interactive {
            return ColorProfile::Ascii;
        }

        let term = self.term.as_deref().unwrap_or_default().to_ascii_lowercase();
        if term.is_empty() || term == "dumb" {
            return ColorProfile::Ascii;
        }
        if term.contains("truecolor")
            || term.contains("24bit")
            || term.contains("direct")
            || TRUE_COLOR_TERMS.iter().any(|t| term.starts_with(t))
        {
            return ColorProfile::TrueColor;
        }
        if term.contains("256color") || term.contains("256-color") {
            return ColorProfile::Ansi256;
        }
        if ANSI_TERMS.iter().any(|t| term.starts_with(t))
            || term.contains("color")
            || term.contains("ansi")
        {
            return ColorProfile::Ansi;
        }
        ColorProfile::Ascii
    }

    /// Decide whether the background is dark. Defaults to dark.
    pub fn has_dark_background(&self) -> bool {
        let Some(hint) = self.color_fg_bg.as_deref() else {
            return true;
        };
        match hint.rsplit(';').next().map(str::parse::<u8>) {
            Some(Ok(7 | 9..=15)) => false,
            _ => true,
        }
    }
}

#[cfg(feature = "native")]
fn is_interactive(target: &OutputTarget) -> bool {
    use crossterm::tty::IsTty;

    match target {
        OutputTarget::Stdout => std::io::stdout().is_tty(),
        OutputTarget::Stderr => std::io::stderr().is_tty(),
        OutputTarget::Custom(_) => false,
    }
}

#[cfg(not(feature = "native"))]
fn is_interactive(_target: &OutputTarget) -> bool {
    false
}

/// Terminal renderer: an output target plus its cached capabilities.
#[derive(Debug)]
pub struct Renderer {
    target: OutputTarget,
    env: Option<Environment>,
    color_profile: Mutex<Option<ColorProfile>>,
    has_dark_background: Mutex<Option<bool>>,
}

impl Renderer {
    /// Create a renderer that detects capabilities from the process environment.
    pub fn new(target: OutputTarget) -> Self {
        Self {
            target,
            env: None,
            color_profile: Mutex::new(None),
            has_dark_background: Mutex::new(None),
        }
    }

    /// Create a renderer that detects capabilities from explicit signals.
    pub fn with_environment(target: OutputTarget, env: Environment) -> Self {
        Self {
            env: Some(env),
            ..Self::new(target)
        }
    }

    /// Create a renderer with a fixed tier and background darkness.
    pub fn fixed(profile: ColorProfile, dark_background: bool) -> Self {
        Self {
            target: OutputTarget::Custom("fixed".to_string()),
            env: None,
            color_profile: Mutex::new(Some(profile)),
            has_dark_background: Mutex::new(Some(dark_background)),
        }
    }

    /// The output target this renderer is bound to.
    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    fn environment(&self) -> Environment {
        self.env
            .clone()
            .unwrap_or_else(|| Environment::from_env(&self.target))
    }

    /// Get the color profile, detecting it on first call.
    pub fn color_profile(&self) -> ColorProfile {
        let mut cached = lock(&self.color_profile);
        *cached.get_or_insert_with(|| {
            let env = self.environment();
            let profile = env.color_profile();
            debug!(
                output = ?self.target,
                term = ?env.term,
                no_color = env.no_color,
                force_true_color = env.force_true_color,
                interactive = env.interactive,
                profile = ?profile,
                "detected color profile"
            );
            profile
        })
    }

    /// Override the color profile.
    pub fn set_color_profile(&self, profile: ColorProfile) {
        *lock(&self.color_profile) = Some(profile);
    }

    /// Check if the terminal has a dark background, detecting it on first call.
    pub fn has_dark_background(&self) -> bool {
        let mut cached = lock(&self.has_dark_background);
        *cached.get_or_insert_with(|| {
            let env = self.environment();
            let dark = env.has_dark_background();
            debug!(output = ?self.target, hint = ?env.color_fg_bg, dark, "detected background");
            dark
        })
    }

    /// Override the dark background flag.
    pub fn set_has_dark_background(&self, dark: bool) {
        *lock(&self.has_dark_background) = Some(dark);
    }

    /// A new empty style bound to this renderer.
    pub fn new_style(self: &Arc<Self>) -> Style {
        Style::new().renderer(Arc::clone(self))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputTarget::Stdout)
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get the process default renderer.
pub fn default_renderer() -> Arc<Renderer> {
    let guard = DEFAULT_RENDERER.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Replace the process default renderer.
pub fn set_default_renderer(renderer: Arc<Renderer>) {
    let mut guard = DEFAULT_RENDERER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    debug!(output = ?renderer.target, "replacing default renderer");
    *guard = renderer;
}

// Public functions for global renderer access

/// Get the default renderer's color profile.
pub fn color_profile() -> ColorProfile {
    default_renderer().color_profile()
}

/// Check if the default renderer's background is dark.
pub fn has_dark_background() -> bool {
    default_renderer().has_dark_background()
}
