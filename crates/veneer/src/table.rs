//! Tabular rendering on top of styles, placement and column resizing.
//!
//! # Example
//!
//! ```rust
//! use veneer::table::Table;
//!
//! let table = Table::new()
//!     .headers(["Name", "Age"])
//!     .row(["Alice", "30"])
//!     .row(["Bob", "7"]);
//!
//! let out = table.render();
//! assert!(out.contains("Alice"));
//! assert!(out.starts_with('╭'));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::border::{fill_edge, Border};
use crate::metrics::{visible_width, width};
use crate::place::place_vertical;
use crate::position::Position;
use crate::resize::resize_columns;
use crate::style::Style;

/// Row index passed to a style function for header cells.
pub const HEADER_ROW: isize = -1;

/// A source of table cells.
pub trait Data: Send + Sync {
    /// The cell at `row`, `col`; empty when out of bounds.
    fn at(&self, row: usize, col: usize) -> String;
    /// Number of rows.
    fn rows(&self) -> usize;
    /// Number of columns.
    fn columns(&self) -> usize;
}

/// Rows of strings held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringData {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl StringData {
    /// Create from rows. Rows may have different lengths.
    pub fn new<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = Self::default();
        for row in rows {
            data.append(row);
        }
        data
    }

    /// Add a row.
    pub fn append<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        self.columns = self.columns.max(row.len());
        self.rows.push(row);
    }

    /// Add a two-cell key/value row.
    pub fn item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.append([key.into(), value.into()]);
    }

    fn copy_from(data: &dyn Data) -> Self {
        let mut copy = Self::default();
        for r in 0..data.rows() {
            copy.append((0..data.columns()).map(|c| data.at(r, c)));
        }
        copy
    }
}

impl Data for StringData {
    fn at(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or_default()
    }

    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn columns(&self) -> usize {
        self.columns
    }
}

/// A view of another source that keeps only rows matching a predicate.
///
/// Matching rows are found once, when the predicate is set, so lookups do
/// not re-run it.
#[derive(Debug, Clone)]
pub struct Filter<D> {
    data: D,
    matches: Vec<usize>,
}

impl<D: Data> Filter<D> {
    /// Wrap a source; every row passes until a predicate is set.
    pub fn new(data: D) -> Self {
        let matches = (0..data.rows()).collect();
        Self { data, matches }
    }

    /// Keep rows whose index satisfies `f`. Replaces any earlier predicate.
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        self.matches = (0..self.data.rows()).filter(|&i| f(i)).collect();
        self
    }
}

impl<D: Data> Data for Filter<D> {
    fn at(&self, row: usize, col: usize) -> String {
        self.matches
            .get(row)
            .map(|&i| self.data.at(i, col))
            .unwrap_or_default()
    }

    fn rows(&self) -> usize {
        self.matches.len()
    }

    fn columns(&self) -> usize {
        self.data.columns()
    }
}

enum Source {
    Strings(StringData),
    Custom(Box<dyn Data>),
}

impl Source {
    fn as_data(&self) -> &dyn Data {
        match self {
            Source::Strings(s) => s,
            Source::Custom(d) => d.as_ref(),
        }
    }
}

type StyleFunc = Arc<dyn Fn(isize, usize) -> Style + Send + Sync>;

/// A bordered table.
pub struct Table {
    headers: Vec<String>,
    source: Source,
    border: Border,
    border_top: bool,
    border_bottom: bool,
    border_left: bool,
    border_right: bool,
    border_header: bool,
    border_column: bool,
    border_row: bool,
    border_style: Style,
    style_func: Option<StyleFunc>,
    width: Option<usize>,
    height: Option<usize>,
    offset: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            source: Source::Strings(StringData::default()),
            border: Border::rounded(),
            border_top: true,
            border_bottom: true,
            border_left: true,
            border_right: true,
            border_header: true,
            border_column: true,
            border_row: false,
            border_style: Style::new(),
            style_func: None,
            width: None,
            height: None,
            offset: 0,
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("headers", &self.headers)
            .field("rows", &self.source.as_data().rows())
            .field("width", &self.width)
            .field("offset", &self.offset)
            .finish()
    }
}

impl Table {
    /// An empty table with a rounded border.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header cells.
    pub fn headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a row.
    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        if let Source::Custom(data) = &self.source {
            self.source = Source::Strings(StringData::copy_from(data.as_ref()));
        }
        if let Source::Strings(rows) = &mut self.source {
            rows.append(cells);
        }
        self
    }

    /// Append several rows.
    pub fn rows<R, S>(self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |table, row| table.row(row))
    }

    /// Replace the rows with a data source.
    pub fn data(mut self, data: impl Data + 'static) -> Self {
        self.source = Source::Custom(Box::new(data));
        self
    }

    /// Remove every row.
    pub fn clear_rows(mut self) -> Self {
        self.source = Source::Strings(StringData::default());
        self
    }

    /// Set the border glyphs.
    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_top(mut self, v: bool) -> Self {
        self.border_top = v;
        self
    }

    pub fn border_bottom(mut self, v: bool) -> Self {
        self.border_bottom = v;
        self
    }

    pub fn border_left(mut self, v: bool) -> Self {
        self.border_left = v;
        self
    }

    pub fn border_right(mut self, v: bool) -> Self {
        self.border_right = v;
        self
    }

    /// Draw the rule under the header row.
    pub fn border_header(mut self, v: bool) -> Self {
        self.border_header = v;
        self
    }

    /// Draw rules between columns.
    pub fn border_column(mut self, v: bool) -> Self {
        self.border_column = v;
        self
    }

    /// Draw rules between data rows.
    pub fn border_row(mut self, v: bool) -> Self {
        self.border_row = v;
        self
    }

    /// Style applied to border glyphs.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Pick a style per cell. The header row is [`HEADER_ROW`].
    pub fn style_func<F>(mut self, f: F) -> Self
    where
        F: Fn(isize, usize) -> Style + Send + Sync + 'static,
    {
        self.style_func = Some(Arc::new(f));
        self
    }

    /// Total width, borders included. Columns grow or shrink to fit.
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// Maximum number of output lines. Data rows that do not fit are dropped.
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }

    /// Skip the first `n` data rows.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = n;
        self
    }

    fn cell_style(&self, row: isize, col: usize) -> Style {
        self.style_func
            .as_ref()
            .map_or_else(Style::new, |f| f(row, col))
    }

    /// Render the table. An empty table renders as the empty string.
    pub fn render(&self) -> String {
        let data = self.source.as_data();
        let columns = self.headers.len().max(data.columns());
        if columns == 0 {
            return String::new();
        }

        let mut grid: Vec<(isize, Vec<String>)> = Vec::new();
        if !self.headers.is_empty() {
            let cells = (0..columns)
                .map(|c| self.headers.get(c).cloned().unwrap_or_default())
                .collect();
            grid.push((HEADER_ROW, cells));
        }
        for r in self.offset..data.rows() {
            let cells = (0..columns).map(|c| data.at(r, c)).collect();
            grid.push((r as isize, cells));
        }

        let minimums: Vec<usize> = (0..columns)
            .map(|c| {
                grid.iter()
                    .map(|(r, cells)| width(&self.cell_style(*r, c).render(&cells[c])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let overhead = usize::from(self.border_left)
            + usize::from(self.border_right)
            + if self.border_column { columns - 1 } else { 0 };
        let widths = resize_columns(&minimums, self.width.map(|w| w.saturating_sub(overhead)));

        let blocks: Vec<(isize, Vec<String>)> = grid
            .iter()
            .map(|(r, cells)| (*r, self.render_row(*r, cells, &widths)))
            .collect();

        let mut lines = Vec::new();
        if self.border_top {
            lines.push(self.rule(&widths, &self.border.top, Rule::Top));
        }

        let bottom = if self.border_bottom {
            Some(self.rule(&widths, &self.border.bottom, Rule::Bottom))
        } else {
            None
        };
        let budget = self.height.unwrap_or(usize::MAX);
        let reserved = usize::from(bottom.is_some());

        let mut previous: Option<isize> = None;
        for (r, block) in &blocks {
            let separator = match previous {
                Some(HEADER_ROW) if self.border_header => {
                    Some(self.rule(&widths, &self.border.top, Rule::Middle))
                }
                Some(p) if p != HEADER_ROW && self.border_row => {
                    Some(self.rule(&widths, &self.border.top, Rule::Middle))
                }
                _ => None,
            };
            let needed = block.len() + usize::from(separator.is_some());
            if *r != HEADER_ROW && lines.len() + needed + reserved > budget {
                break;
            }
            lines.extend(separator);
            lines.extend(block.iter().cloned());
            previous = Some(*r);
        }

        lines.extend(bottom);
        lines.join("\n")
    }

    /// The lines of one row, every cell padded to the row height.
    fn render_row(&self, row: isize, cells: &[String], widths: &[usize]) -> Vec<String> {
        let rendered: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(c, (text, &w))| {
                let w = u16::try_from(w).unwrap_or(u16::MAX);
                self.cell_style(row, c).width(w).max_width(w).render(text)
            })
            .collect();
        let row_height = rendered.iter().map(|b| crate::metrics::height(b)).max().unwrap_or(1);

        let padded: Vec<Vec<String>> = rendered
            .iter()
            .zip(widths)
            .map(|(block, &w)| {
                place_vertical(row_height, Position::TOP, block)
                    .split('\n')
                    .map(|l| format!("{l}{}", " ".repeat(w.saturating_sub(visible_width(l)))))
                    .collect()
            })
            .collect();

        let left = self.glyph(&self.border.left);
        let right = self.glyph(&self.border.right);
        let column = self.glyph(&self.border.left);

        (0..row_height)
            .map(|i| {
                let mut line = String::new();
                if self.border_left {
                    line.push_str(&left);
                }
                for (c, cell) in padded.iter().enumerate() {
                    if c > 0 && self.border_column {
                        line.push_str(&column);
                    }
                    line.push_str(&cell[i]);
                }
                if self.border_right {
                    line.push_str(&right);
                }
                line
            })
            .collect()
    }

    fn glyph(&self, s: &str) -> String {
        self.border_style.render(if s.is_empty() { " " } else { s })
    }

    /// A horizontal rule with junctions at the column boundaries.
    fn rule(&self, widths: &[usize], fill: &str, kind: Rule) -> String {
        let b = &self.border;
        let (left, junction, right) = match kind {
            Rule::Top => (&b.top_left, &b.middle_top, &b.top_right),
            Rule::Middle => (&b.middle_left, &b.middle, &b.middle_right),
            Rule::Bottom => (&b.bottom_left, &b.middle_bottom, &b.bottom_right),
        };

        let mut line = String::new();
        if self.border_left {
            line.push_str(left);
        }
        for (c, &w) in widths.iter().enumerate() {
            if c > 0 && self.border_column {
                line.push_str(junction);
            }
            line.push_str(&fill_edge(fill, w));
        }
        if self.border_right {
            line.push_str(right);
        }
        self.border_style.render(&line)
    }
}

#[derive(Clone, Copy)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
