use std::fmt::{self, Display};

use crate::layout;
use crate::row::Row;
use crate::style::{Alignment, Border, Theme};

/// A mutable table builder and the snapshot the renderer reads.
///
/// A table is assembled incrementally: set a header, append rows, adjust
/// styling. Rendering is a pure read-only projection over the accumulated
/// state, so settings changes always take effect on the next render.
///
/// The column count is the header's length if a header exists, otherwise
/// the first body row's length, otherwise zero. Rows whose length differs
/// from that count are accepted: the renderer pads short rows with empty
/// cells and ignores extra cells.
///
/// # Example
///
/// ```rust
/// use tabulon::{Table, Theme};
///
/// let mut table = Table::new();
/// table
///     .set_header(["Name", "Age"])
///     .add_row(["Alice", "30"])
///     .set_theme(Theme::Grid);
///
/// print!("{}", table.render());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    theme: Theme,
    border: Border,
    column_alignments: Vec<Alignment>,
    column_widths: Vec<Option<usize>>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        let theme = Theme::default();
        Self {
            header: None,
            rows: Vec::new(),
            theme,
            border: theme.border(),
            column_alignments: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    /// Convenience constructor that sets the header immediately.
    pub fn with_header(header: impl Into<Row>) -> Self {
        let mut table = Self::new();
        table.set_header(header);
        table
    }

    /// Sets (or replaces) the header row.
    pub fn set_header(&mut self, header: impl Into<Row>) -> &mut Self {
        let header = header.into();
        self.reserve_columns(header.len());
        self.header = Some(header);
        self
    }

    /// Appends a body row. The first row of a headerless table fixes the
    /// column count.
    pub fn add_row(&mut self, row: impl Into<Row>) -> &mut Self {
        let row = row.into();
        if self.column_alignments.is_empty() && self.column_widths.is_empty() {
            self.reserve_columns(row.len());
        }
        self.rows.push(row);
        self
    }

    /// Selects a theme, atomically swapping in its border.
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self.border = theme.border();
        self
    }

    /// Overrides the border directly, leaving the theme name untouched.
    pub fn set_border(&mut self, border: Border) -> &mut Self {
        self.border = border;
        self
    }

    /// Sets the default alignment for a column, growing the per-column
    /// table on demand; intermediate columns default to left.
    pub fn set_column_alignment(&mut self, column: usize, alignment: Alignment) -> &mut Self {
        if column >= self.column_alignments.len() {
            self.column_alignments.resize(column + 1, Alignment::Left);
        }
        self.column_alignments[column] = alignment;
        self
    }

    /// Sets or clears an explicit width for a column. An explicit width
    /// wins over content even when smaller, truncating every cell in the
    /// column.
    pub fn set_column_width(&mut self, column: usize, width: Option<usize>) -> &mut Self {
        if column >= self.column_widths.len() {
            self.column_widths.resize(column + 1, None);
        }
        self.column_widths[column] = width;
        self
    }

    /// Drops the header and all rows; styling settings survive.
    pub fn clear(&mut self) -> &mut Self {
        self.header = None;
        self.rows.clear();
        self
    }

    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Number of rows including the header, if present.
    pub fn row_count(&self) -> usize {
        self.rows.len() + usize::from(self.header.is_some())
    }

    pub fn column_count(&self) -> usize {
        if let Some(header) = &self.header {
            header.len()
        } else if let Some(first) = self.rows.first() {
            first.len()
        } else {
            0
        }
    }

    /// True when the table has neither a header nor any rows; an empty
    /// table renders to the empty string.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }

    /// The default alignment for a column; left for columns never set.
    pub fn column_alignment(&self, column: usize) -> Alignment {
        self.column_alignments.get(column).copied().unwrap_or_default()
    }

    /// The explicit width for a column, if one was set.
    pub fn column_width(&self, column: usize) -> Option<usize> {
        self.column_widths.get(column).copied().flatten()
    }

    pub(crate) fn explicit_widths(&self) -> &[Option<usize>] {
        &self.column_widths
    }

    /// Renders the table to its complete text form. Never fails and never
    /// mutates; an empty or zero-column table yields the empty string.
    pub fn render(&self) -> String {
        layout::render(self)
    }

    fn reserve_columns(&mut self, count: usize) {
        if self.column_alignments.len() < count {
            self.column_alignments.resize(count, Alignment::Left);
        }
        if self.column_widths.len() < count {
            self.column_widths.resize(count, None);
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_to_nothing() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.render(), "");
    }

    #[test]
    fn header_defines_the_column_count() {
        let mut table = Table::new();
        table.set_header(["Col1", "Col2", "Col3"]);
        assert!(!table.is_empty());
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn first_row_defines_columns_without_a_header() {
        let mut table = Table::new();
        table.add_row(["A", "B", "C"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 3);

        table.add_row(["D", "E", "F"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn ascii_grid_scenario() {
        let mut table = Table::new();
        table.set_header(["Name", "Age"]);
        table.add_row(["Alice", "30"]);

        let expected = "\
+-------+-----+
| Name  | Age |
+-------+-----+
| Alice | 30  |
+-------+-----+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn disabled_border_scenario() {
        let mut table = Table::new();
        table.set_header(["Name", "Age"]);
        table.add_row(["Alice", "30"]);
        table.set_theme(Theme::None);

        assert_eq!(table.render(), " Name  Age\n Alice 30 \n");
    }

    #[test]
    fn disabled_border_output_has_no_rule_glyphs() {
        let mut table = Table::new();
        table.set_header(["A", "B"]);
        table.add_row(["1", "2"]);
        table.set_theme(Theme::None);

        let out = table.render();
        assert!(!out.contains('+'));
        assert!(!out.contains('-'));
        assert!(!out.contains('|'));
    }

    #[test]
    fn render_is_idempotent() {
        let mut table = Table::new();
        table.set_header(["X"]);
        table.add_row(["1\n2"]);
        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn multiline_cells_stack_and_stay_in_sync() {
        let mut table = Table::new();
        table.add_row(["one\ntwo\nthree", "solo"]);

        let expected = "\
+-------+------+
| one   | solo |
| two   |      |
| three |      |
+-------+------+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn ragged_rows_pad_and_ignore() {
        let mut table = Table::new();
        table.set_header(["A", "B"]);
        table.add_row(["1"]);
        table.add_row(["2", "3", "ignored"]);

        let expected = "\
+---+---+
| A | B |
+---+---+
| 1 |   |
+---+---+
| 2 | 3 |
+---+---+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn explicit_width_truncates_every_cell() {
        let mut table = Table::new();
        table.set_header(["Header"]);
        table.add_row(["abcdefgh"]);
        table.set_column_width(0, Some(3));
        table.set_column_alignment(0, Alignment::Right);

        let expected = "\
+-----+
| Hea |
+-----+
| abc |
+-----+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn alignments_resolve_cell_then_column_then_left() {
        use crate::cell::Cell;

        let mut table = Table::new();
        table.set_header(["AA", "BB", "CC"]);
        table.set_column_alignment(1, Alignment::Center);
        table.set_column_alignment(2, Alignment::Right);

        let mut row = Row::new();
        row.add_cell("x");
        row.add_cell("x");
        // Cell override beats the column's Right.
        row.add_cell(Cell::new("x").with_alignment(Alignment::Left));
        table.add_row(row);

        let expected = "\
+----+----+----+
| AA | BB | CC |
+----+----+----+
| x  | x  | x  |
+----+----+----+
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn center_alignment_puts_odd_space_after() {
        let mut table = Table::new();
        table.set_header(["12345"]);
        table.add_row(["AB"]);
        table.set_column_alignment(0, Alignment::Center);

        let out = table.render();
        assert!(out.contains("|  AB   |"), "got: {out}");
    }

    #[test]
    fn vertical_only_border_renders_zero_width_rules() {
        // Horizontal glyph empty but vertical present: the border counts
        // as enabled and its rules collapse to just the end glyphs.
        let mut table = Table::new();
        table.set_header(["A"]);
        table.add_row(["1"]);
        table.set_border(Border::new("", "|", "<", ">", "<", ">", "", "", "<", ">", ""));

        let expected = "\
<>
| A |
<>
| 1 |
<>
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn set_theme_swaps_the_border() {
        let mut table = Table::new();
        table.set_theme(Theme::UnicodeSingle);
        assert_eq!(*table.border(), Border::unicode_single());
        table.set_theme(Theme::None);
        assert!(!table.border().enabled());
    }

    #[test]
    fn themes_differ_only_in_glyphs() {
        let mut table = Table::new();
        table.set_header(["Name", "Value"]);
        table.add_row(["Test", "123"]);

        let grid = table.set_theme(Theme::Grid).render();
        let unicode = table.set_theme(Theme::UnicodeSingle).render();

        assert_ne!(grid, unicode);
        assert_eq!(grid.lines().count(), unicode.lines().count());
    }

    #[test]
    fn clear_keeps_styling() {
        let mut table = Table::new();
        table.set_header(["A"]);
        table.add_row(["1"]);
        table.set_theme(Theme::UnicodeDouble);
        table.set_column_alignment(0, Alignment::Right);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.render(), "");
        assert_eq!(table.theme(), Theme::UnicodeDouble);
        assert_eq!(table.column_alignment(0), Alignment::Right);
    }

    #[test]
    fn display_matches_render() {
        let mut table = Table::new();
        table.set_header(["Test"]);
        table.add_row(["Value"]);
        assert_eq!(format!("{table}"), table.render());
    }

    #[test]
    fn widening_a_cell_never_narrows_its_column() {
        let mut table = Table::new();
        table.set_header(["H"]);
        table.add_row(["aa"]);
        let narrow = table.render();

        let mut wide = table.clone();
        wide.rows = vec![Row::from(["aaaa"])];
        let widened = wide.render();

        let narrow_width = narrow.lines().next().unwrap().chars().count();
        let wide_width = widened.lines().next().unwrap().chars().count();
        assert!(wide_width >= narrow_width);
    }
}
