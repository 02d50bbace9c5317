#![allow(clippy::uninlined_format_args)]

use std::sync::Arc;

use proptest::prelude::*;
use veneer::{
    Border, Color, ColorProfile, Position, PropKey, Property, Renderer, Style, Transform, height,
    join_horizontal, join_vertical, place, resize_columns, strip_ansi, truncate_width,
    visible_width, width,
};

fn plain() -> Style {
    Style::new().renderer(Arc::new(Renderer::fixed(ColorProfile::Ascii, true)))
}

fn is_rectangular(s: &str) -> bool {
    let w = width(s);
    s.split('\n').all(|l| visible_width(l) == w)
}

/// A value for `key`; `alt` picks one of two distinct values.
fn sample(key: PropKey, alt: bool) -> Property {
    let flag = alt;
    let size = if alt { 3 } else { 1 };
    let color = Color::Basic(if alt { 2 } else { 1 });
    match key {
        PropKey::Foreground => Property::Foreground(color),
        PropKey::Background => Property::Background(color),
        PropKey::Bold => Property::Bold(flag),
        PropKey::Italic => Property::Italic(flag),
        PropKey::Underline => Property::Underline(flag),
        PropKey::Strikethrough => Property::Strikethrough(flag),
        PropKey::Reverse => Property::Reverse(flag),
        PropKey::Blink => Property::Blink(flag),
        PropKey::Faint => Property::Faint(flag),
        PropKey::PaddingTop => Property::PaddingTop(size),
        PropKey::PaddingRight => Property::PaddingRight(size),
        PropKey::PaddingBottom => Property::PaddingBottom(size),
        PropKey::PaddingLeft => Property::PaddingLeft(size),
        PropKey::MarginTop => Property::MarginTop(size),
        PropKey::MarginRight => Property::MarginRight(size),
        PropKey::MarginBottom => Property::MarginBottom(size),
        PropKey::MarginLeft => Property::MarginLeft(size),
        PropKey::MarginBackground => Property::MarginBackground(color),
        PropKey::Width => Property::Width(size),
        PropKey::Height => Property::Height(size),
        PropKey::MaxWidth => Property::MaxWidth(size),
        PropKey::MaxHeight => Property::MaxHeight(size),
        PropKey::BorderStyle => {
            Property::BorderStyle(if alt { Border::rounded() } else { Border::normal() })
        }
        PropKey::BorderTop => Property::BorderTop(flag),
        PropKey::BorderRight => Property::BorderRight(flag),
        PropKey::BorderBottom => Property::BorderBottom(flag),
        PropKey::BorderLeft => Property::BorderLeft(flag),
        PropKey::BorderForeground => Property::BorderForeground(color),
        PropKey::BorderTopForeground => Property::BorderTopForeground(color),
        PropKey::BorderRightForeground => Property::BorderRightForeground(color),
        PropKey::BorderBottomForeground => Property::BorderBottomForeground(color),
        PropKey::BorderLeftForeground => Property::BorderLeftForeground(color),
        PropKey::BorderBackground => Property::BorderBackground(color),
        PropKey::BorderTopBackground => Property::BorderTopBackground(color),
        PropKey::BorderRightBackground => Property::BorderRightBackground(color),
        PropKey::BorderBottomBackground => Property::BorderBottomBackground(color),
        PropKey::BorderLeftBackground => Property::BorderLeftBackground(color),
        PropKey::AlignHorizontal => {
            Property::AlignHorizontal(if alt { Position::RIGHT } else { Position::CENTER })
        }
        PropKey::AlignVertical => {
            Property::AlignVertical(if alt { Position::BOTTOM } else { Position::CENTER })
        }
        PropKey::Inline => Property::Inline(flag),
        PropKey::TabWidth => Property::TabWidth(if alt { -1 } else { 2 }),
        PropKey::Transform => Property::Transform(Transform::new(str::to_uppercase)),
        PropKey::ColorWhitespace => Property::ColorWhitespace(flag),
        PropKey::UnderlineSpaces => Property::UnderlineSpaces(flag),
        PropKey::StrikethroughSpaces => Property::StrikethroughSpaces(flag),
        PropKey::LiteralString => {
            Property::LiteralString(String::from(if alt { "b" } else { "a" }))
        }
    }
}

fn position() -> impl Strategy<Value = Position> {
    prop::sample::select(vec![
        Position::TOP,
        Position::CENTER,
        Position::BOTTOM,
        Position::new(0.25),
    ])
}

// =============================================================================
// Measurement
// =============================================================================

proptest! {
    #[test]
    fn width_never_panics(s in "\\PC{0,200}") {
        let _ = width(&s);
    }

    #[test]
    fn ascii_width_equals_len(s in "[a-zA-Z0-9 ]{0,100}") {
        prop_assert_eq!(visible_width(&s), s.len());
    }

    #[test]
    fn escapes_have_no_width(text in "[a-z]{1,20}", code in 0u8..108) {
        let styled = format!("\x1b[{code}m{text}\x1b[0m");
        prop_assert_eq!(width(&styled), text.len());
        prop_assert_eq!(strip_ansi(&styled), text);
    }

    #[test]
    fn truncate_respects_limit(s in "\\PC{0,60}", max in 0usize..30) {
        let cut = truncate_width(&s, max);
        prop_assert!(visible_width(&cut) <= max);
    }
}

// =============================================================================
// Rendering
// =============================================================================

proptest! {
    #[test]
    fn render_is_rectangular(
        text in "[a-z ]{0,20}(\n[a-z ]{0,20}){0,3}",
        pad in 0u16..3,
        bordered in any::<bool>(),
    ) {
        let mut style = plain().padding(&[pad]).unwrap();
        if bordered {
            style = style.border(Border::rounded());
        }
        prop_assert!(is_rectangular(&style.render(&text)));
    }

    #[test]
    fn frame_adds_exact_size(
        text in "[a-z]{1,10}(\n[a-z]{1,10}){0,3}",
        pad in 0u16..3,
        margin in 0u16..3,
    ) {
        let style = plain()
            .padding(&[pad]).unwrap()
            .margin(&[margin]).unwrap()
            .border(Border::normal());
        let out = style.render(&text);
        let frame = 2 * usize::from(pad) + 2 * usize::from(margin) + 2;
        prop_assert_eq!(width(&out), width(&text) + frame);
        prop_assert_eq!(height(&out), height(&text) + frame);
        prop_assert_eq!(style.get_horizontal_frame_size() + width(&text), width(&out));
    }

    #[test]
    fn declared_width_is_met(text in "[a-z]{1,8}", w in 10u16..30) {
        let out = plain().width(w).render(&text);
        prop_assert_eq!(width(&out), usize::from(w));
    }

    #[test]
    fn inherit_keeps_own_properties(bold in any::<bool>(), parent_bold in any::<bool>()) {
        let parent = plain().bold(parent_bold).italic(true).padding(&[2]).unwrap();
        let child = plain().bold(bold).inherit(&parent);
        prop_assert_eq!(child.get_bold(), bold);
        prop_assert!(child.get_italic());
        prop_assert_eq!(child.get_padding().top, 0);
    }

    #[test]
    fn inherit_law_holds_for_every_key(
        in_child in prop::collection::vec(any::<bool>(), PropKey::ALL.len()),
        in_parent in prop::collection::vec(any::<bool>(), PropKey::ALL.len()),
    ) {
        let mut child = Style::new();
        let mut parent = Style::new();
        let mut child_props = Vec::new();
        let mut parent_props = Vec::new();
        for (i, &key) in PropKey::ALL.iter().enumerate() {
            let (c, p) = (sample(key, false), sample(key, true));
            if in_child[i] {
                child = child.set(c.clone());
            }
            if in_parent[i] {
                parent = parent.set(p.clone());
            }
            child_props.push(c);
            parent_props.push(p);
        }

        let merged = child.inherit(&parent);
        for (i, &key) in PropKey::ALL.iter().enumerate() {
            let expected = if in_child[i] {
                Some(&child_props[i])
            } else if in_parent[i] && !key.is_spacing() {
                Some(&parent_props[i])
            } else {
                None
            };
            prop_assert_eq!(merged.get(key), expected, "{:?}", key);
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    #[test]
    fn join_horizontal_shape(
        a in "[a-z]{0,6}(\n[a-z]{0,6}){0,4}",
        b in "[a-z]{0,6}(\n[a-z]{0,6}){0,4}",
        pos in position(),
    ) {
        let out = join_horizontal(pos, &[&a, &b]);
        prop_assert_eq!(height(&out), height(&a).max(height(&b)));
        prop_assert_eq!(width(&out), width(&a) + width(&b));
        prop_assert!(is_rectangular(&out));
    }

    #[test]
    fn join_vertical_shape(
        a in "[a-z]{0,6}(\n[a-z]{0,6}){0,4}",
        b in "[a-z]{0,6}(\n[a-z]{0,6}){0,4}",
        pos in position(),
    ) {
        let out = join_vertical(pos, &[&a, &b]);
        prop_assert_eq!(height(&out), height(&a) + height(&b));
        prop_assert_eq!(width(&out), width(&a).max(width(&b)));
        prop_assert!(is_rectangular(&out));
    }

    #[test]
    fn place_never_shrinks(
        s in "[a-z]{1,6}(\n[a-z]{1,6}){0,3}",
        w in 0usize..12,
        h in 0usize..8,
        hp in position(),
        vp in position(),
    ) {
        let block = plain().render(&s);
        let out = place(w, h, hp, vp, &block);
        prop_assert_eq!(width(&out), w.max(width(&block)));
        prop_assert_eq!(height(&out), h.max(height(&block)));
    }
}

// =============================================================================
// Column resizing
// =============================================================================

proptest! {
    #[test]
    fn resize_hits_reachable_target(
        mins in prop::collection::vec(0usize..20, 1..6),
        target in 0usize..80,
    ) {
        let widths = resize_columns(&mins, Some(target));
        prop_assert_eq!(widths.len(), mins.len());
        if target >= mins.len() {
            prop_assert_eq!(widths.iter().sum::<usize>(), target);
        }
    }

    #[test]
    fn resize_grow_never_below_minimum(
        mins in prop::collection::vec(0usize..20, 1..6),
        extra in 0usize..40,
    ) {
        let target = mins.iter().sum::<usize>() + extra;
        let widths = resize_columns(&mins, Some(target));
        for (w, m) in widths.iter().zip(&mins) {
            prop_assert!(w >= m);
        }
    }

    #[test]
    fn resize_shrink_keeps_one_cell(
        mins in prop::collection::vec(1usize..20, 1..6),
        target in 0usize..40,
    ) {
        let sum: usize = mins.iter().sum();
        prop_assume!(target < sum);
        let widths = resize_columns(&mins, Some(target));
        for (w, m) in widths.iter().zip(&mins) {
            prop_assert!(*w >= 1);
            prop_assert!(w <= m);
        }
    }

    #[test]
    fn resize_shrink_keeps_column_order(
        mins in prop::collection::vec(0usize..20, 1..6),
        target in 0usize..40,
    ) {
        prop_assume!(target < mins.iter().sum::<usize>());
        let widths = resize_columns(&mins, Some(target));
        for i in 0..mins.len() {
            for j in 0..mins.len() {
                if mins[i] > mins[j] {
                    prop_assert!(
                        widths[i] >= widths[j],
                        "{:?} -> {:?}", mins, widths
                    );
                }
            }
        }
    }
}
