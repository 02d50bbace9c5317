//! Replacing the process default renderer.
//!
//! Kept in its own test binary with a single test so no other test observes
//! the global swap.

use std::sync::Arc;
use std::thread;

use veneer::{
    color_profile, default_renderer, has_dark_background, set_default_renderer, Color,
    ColorProfile, Renderer, Style,
};

#[test]
fn swapping_the_default_renderer() {
    let ansi = Arc::new(Renderer::fixed(ColorProfile::Ansi, true));
    set_default_renderer(Arc::clone(&ansi));

    assert!(Arc::ptr_eq(&default_renderer(), &ansi));
    assert_eq!(color_profile(), ColorProfile::Ansi);
    assert!(has_dark_background());

    // Unbound styles pick up whatever is installed at render time.
    let bold = Style::new().bold(true);
    assert_eq!(bold.render("x"), "\x1b[1mx\x1b[0m");
    let red = Style::new().foreground(Color::Basic(1));
    assert_eq!(red.render("x"), "\x1b[31mx\x1b[0m");

    let plain = Arc::new(Renderer::fixed(ColorProfile::Ascii, false));
    set_default_renderer(Arc::clone(&plain));
    assert_eq!(red.render("x"), "x");
    assert!(!has_dark_background());

    // Bound styles ignore the default.
    assert_eq!(
        red.clone().renderer(Arc::clone(&ansi)).render("x"),
        "\x1b[31mx\x1b[0m"
    );

    // Concurrent readers only ever see one of the installed renderers.
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..2_000 {
                    let seen = default_renderer();
                    assert!(Arc::ptr_eq(&seen, &ansi) || Arc::ptr_eq(&seen, &plain));
                    let out = red.render("x");
                    assert!(out == "x" || out == "\x1b[31mx\x1b[0m", "{out:?}");
                }
            });
        }
        for i in 0..2_000 {
            let next = if i % 2 == 0 { &ansi } else { &plain };
            set_default_renderer(Arc::clone(next));
        }
    });

    set_default_renderer(Arc::clone(&ansi));
    assert!(Arc::ptr_eq(&default_renderer(), &ansi));
}
