//! The render pipeline: a [`Style`] plus text in, a finished block out.
//!
//! Stages run in a fixed order, each a no-op when its properties are unset:
//! line-ending normalization, tab expansion, inline collapsing or word wrap,
//! text attributes and colors, alignment, padding, max-width/height clamping,
//! border, margin and finally the transform.

use bitflags::bitflags;

use crate::border::compose;
use crate::color::{ColorProfile, Layer};
use crate::metrics::{grapheme_width, segments, truncate_width, visible_width, Segment};
use crate::style::Style;

use unicode_segmentation::UnicodeSegmentation;

const RESET: &str = "\x1b[0m";

bitflags! {
    /// Text attributes emitted as SGR parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextAttrs: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

impl TextAttrs {
    const CODES: [(TextAttrs, u8); 7] = [
        (TextAttrs::BOLD, 1),
        (TextAttrs::FAINT, 2),
        (TextAttrs::ITALIC, 3),
        (TextAttrs::UNDERLINE, 4),
        (TextAttrs::BLINK, 5),
        (TextAttrs::REVERSE, 7),
        (TextAttrs::STRIKETHROUGH, 9),
    ];

    /// One escape per attribute, in SGR code order.
    pub fn sgr(self) -> String {
        Self::CODES
            .iter()
            .filter(|(attr, _)| self.contains(*attr))
            .map(|(_, code)| format!("\x1b[{code}m"))
            .collect()
    }
}

/// Resolved escapes for one render call.
struct Sequences {
    text: String,
    spaces: String,
    whitespace: String,
    margin: String,
}

impl Sequences {
    fn new(style: &Style, profile: ColorProfile, dark_bg: bool) -> Self {
        let mut attrs = TextAttrs::empty();
        attrs.set(TextAttrs::BOLD, style.get_bold());
        attrs.set(TextAttrs::FAINT, style.get_faint());
        attrs.set(TextAttrs::ITALIC, style.get_italic());
        attrs.set(TextAttrs::UNDERLINE, style.get_underline());
        attrs.set(TextAttrs::BLINK, style.get_blink());
        attrs.set(TextAttrs::REVERSE, style.get_reverse());
        attrs.set(TextAttrs::STRIKETHROUGH, style.get_strikethrough());

        let mut space_attrs = attrs;
        space_attrs.set(TextAttrs::UNDERLINE, style.get_underline_spaces());
        space_attrs.set(TextAttrs::STRIKETHROUGH, style.get_strikethrough_spaces());

        let bg = style.get_background();
        let colors = format!(
            "{}{}",
            style.get_foreground().resolve(profile, dark_bg, Layer::Foreground),
            bg.resolve(profile, dark_bg, Layer::Background),
        );

        let whitespace = if style.get_color_whitespace() {
            bg.resolve(profile, dark_bg, Layer::Background)
        } else {
            String::new()
        };

        Self {
            text: format!("{}{colors}", attrs.sgr()),
            spaces: format!("{}{colors}", space_attrs.sgr()),
            whitespace,
            margin: style
                .get_margin_background()
                .resolve(profile, dark_bg, Layer::Background),
        }
    }
}

impl Style {
    /// Render the given text with this style applied.
    pub fn render(&self, text: &str) -> String {
        self.render_all(&[text])
    }

    /// Render several strings joined with a single space.
    ///
    /// With no arguments the literal string set by [`Style::set_string`] is
    /// rendered on its own; otherwise it is prepended to the arguments.
    pub fn render_all(&self, args: &[&str]) -> String {
        let renderer = self.get_renderer();
        self.render_with(args, renderer.color_profile(), renderer.has_dark_background())
    }

    /// Render for an explicit tier and background, bypassing the renderer.
    pub fn render_with(&self, args: &[&str], profile: ColorProfile, dark_bg: bool) -> String {
        let seqs = Sequences::new(self, profile, dark_bg);

        let mut text = join_args(self.value(), args).replace("\r\n", "\n");
        text = expand_tabs(&text, self.get_tab_width());

        let inline = self.get_inline();
        let padding = self.get_padding();
        let pad_h = usize::from(padding.left) + usize::from(padding.right);
        let pad_v = usize::from(padding.top) + usize::from(padding.bottom);
        let width = usize::from(self.get_width());
        let height = usize::from(self.get_height());

        if inline {
            text = text.replace('\n', "");
        } else if width > 0 && width > pad_h {
            text = wrap(&text, width - pad_h);
        }

        let raw: Vec<&str> = text.split('\n').collect();
        let mut lines: Vec<String> = raw.iter().map(|l| style_line(l, &seqs)).collect();

        if !inline {
            let natural = raw.iter().map(|l| visible_width(l)).max().unwrap_or(0);
            let content_width = natural.max(width.saturating_sub(pad_h));
            let content_height = lines.len().max(height.saturating_sub(pad_v));

            let align = self.get_align_horizontal();
            let aligned_by_width = width > 0;
            for line in &mut lines {
                let gap = content_width - visible_width(line);
                if gap == 0 {
                    continue;
                }
                let (before, after) = if aligned_by_width {
                    align.split(gap)
                } else {
                    (0, gap)
                };
                *line = format!(
                    "{}{line}{}",
                    spaces(before, &seqs.whitespace),
                    spaces(after, &seqs.whitespace)
                );
            }

            if content_height > lines.len() {
                let gap = content_height - lines.len();
                let (top, bottom) = self.get_align_vertical().split(gap);
                lines = pad_rows(lines, top, bottom, content_width, &seqs.whitespace);
            }

            lines = pad_block(
                lines,
                (padding.top, padding.right, padding.bottom, padding.left),
                &seqs.whitespace,
            );
        }

        let max_width = usize::from(self.get_max_width());
        if max_width > 0 {
            lines = lines.iter().map(|l| truncate_width(l, max_width)).collect();
        }
        let max_height = usize::from(self.get_max_height());
        if max_height > 0 {
            lines.truncate(max_height);
        }

        let mut out = lines.join("\n");

        if !inline {
            let edges = self.get_border_edges();
            if edges.any() {
                out = compose(
                    &out,
                    &self.get_border_style(),
                    edges,
                    &self.get_border_colors(),
                    profile,
                    dark_bg,
                );
            }

            let margin = self.get_margin();
            let block: Vec<String> = out.split('\n').map(str::to_string).collect();
            out = pad_block(
                block,
                (margin.top, margin.right, margin.bottom, margin.left),
                &seqs.margin,
            )
            .join("\n");
        }

        match self.get_transform() {
            Some(t) => t.apply(&out),
            None => out,
        }
    }
}

fn join_args(literal: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return literal.to_string();
    }
    let joined = args.join(" ");
    if literal.is_empty() {
        joined
    } else {
        format!("{literal} {joined}")
    }
}

fn expand_tabs(s: &str, tab_width: i16) -> String {
    match tab_width {
        n if n < 0 => s.to_string(),
        0 => s.replace('\t', ""),
        n => s.replace('\t', &" ".repeat(n.unsigned_abs().into())),
    }
}

/// Apply the text sequences to each run of non-space and space characters.
fn style_line(line: &str, seqs: &Sequences) -> String {
    if seqs.text.is_empty() && seqs.spaces.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() * 2);
    let mut run = String::new();
    let mut run_is_space = false;

    for c in line.chars() {
        let is_space = c == ' ';
        if is_space != run_is_space {
            push_run(&mut out, &run, run_is_space, seqs);
            run.clear();
            run_is_space = is_space;
        }
        run.push(c);
    }
    push_run(&mut out, &run, run_is_space, seqs);
    out
}

fn push_run(out: &mut String, run: &str, is_space: bool, seqs: &Sequences) {
    if run.is_empty() {
        return;
    }
    let seq = if is_space { &seqs.spaces } else { &seqs.text };
    if seq.is_empty() {
        out.push_str(run);
    } else {
        out.push_str(seq);
        out.push_str(run);
        out.push_str(RESET);
    }
}

/// `n` spaces, wrapped in `seq` when it is non-empty.
fn spaces(n: usize, seq: &str) -> String {
    if n == 0 {
        return String::new();
    }
    if seq.is_empty() {
        " ".repeat(n)
    } else {
        format!("{seq}{}{RESET}", " ".repeat(n))
    }
}

fn pad_rows(lines: Vec<String>, top: usize, bottom: usize, width: usize, seq: &str) -> Vec<String> {
    if top == 0 && bottom == 0 {
        return lines;
    }
    let blank = spaces(width, seq);
    let mut out = Vec::with_capacity(lines.len() + top + bottom);
    out.extend(std::iter::repeat_n(blank.clone(), top));
    out.extend(lines);
    out.extend(std::iter::repeat_n(blank, bottom));
    out
}

/// Surround a rectangular block with space on each side.
fn pad_block(lines: Vec<String>, (top, right, bottom, left): (u16, u16, u16, u16), seq: &str) -> Vec<String> {
    let left = spaces(usize::from(left), seq);
    let right = spaces(usize::from(right), seq);
    let lines: Vec<String> = if left.is_empty() && right.is_empty() {
        lines
    } else {
        lines
            .into_iter()
            .map(|l| format!("{left}{l}{right}"))
            .collect()
    };
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    pad_rows(lines, usize::from(top), usize::from(bottom), width, seq)
}

/// Greedy word wrap at `width` cells. Words wider than `width` are broken.
///
/// Runs of spaces between words that stay on one line are kept as written,
/// leading indentation included. The run at a break point is dropped.
pub(crate) fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if visible_width(line) <= width {
            out.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        let mut gap = 0;
        for (is_space, token) in space_runs(line) {
            if is_space {
                gap += token.len();
                continue;
            }
            let word_width = visible_width(token);
            if current_width + gap + word_width <= width {
                current.push_str(&" ".repeat(gap));
                current.push_str(token);
                current_width += gap + word_width;
                gap = 0;
                continue;
            }
            if current_width > 0 {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            gap = 0;
            if word_width <= width {
                current.push_str(token);
                current_width = word_width;
            } else {
                let mut pieces = break_word(token, width);
                if let Some(last) = pieces.pop() {
                    out.extend(pieces);
                    current_width = visible_width(&last);
                    current = last;
                }
            }
        }
        current.push_str(&" ".repeat(gap.min(width - current_width)));
        out.push(current);
    }
    out.join("\n")
}

/// Split a line into alternating runs of spaces and non-spaces.
fn space_runs(line: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in line.char_indices() {
        let is_space = c == ' ';
        if in_space.is_some_and(|s| s != is_space) {
            runs.push((!is_space, &line[start..i]));
            start = i;
        }
        in_space = Some(is_space);
    }
    if let Some(is_space) = in_space {
        runs.push((is_space, &line[start..]));
    }
    runs
}

/// Split a single word into pieces of at most `width` cells.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for seg in segments(word) {
        match seg {
            Segment::Escape(esc) => current.push_str(esc),
            Segment::Text(t) => {
                for g in t.graphemes(true) {
                    let w = grapheme_width(g);
                    if used + w > width && used > 0 {
                        pieces.push(std::mem::take(&mut current));
                        used = 0;
                    }
                    current.push_str(g);
                    used += w;
                }
            }
        }
    }
    pieces.push(current);
    pieces
}
