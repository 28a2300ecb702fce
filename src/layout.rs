use crate::buffer::LineBuffer;
use crate::cell::Cell;
use crate::row::Row;
use crate::style::{Alignment, Border};
use crate::table::Table;

/// Renders a table snapshot to its complete text form.
///
/// Pure projection: reads the table, never mutates it. An empty table (no
/// header, no rows) or a zero-column table renders to the empty string with
/// no stray rule lines.
pub(crate) fn render(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }
    let widths = column_widths(table);
    if widths.is_empty() {
        return String::new();
    }

    let border = table.border();
    let bordered = border.enabled();
    let mut buff = LineBuffer::default();

    if bordered {
        rule(
            &mut buff,
            border,
            &widths,
            border.top_left(),
            border.top_intersection(),
            border.top_right(),
        );
    }

    if let Some(header) = table.header() {
        render_row(&mut buff, table, header, &widths);
        if bordered {
            separator(&mut buff, border, &widths);
        }
    }

    let rows = table.rows();
    for (idx, row) in rows.iter().enumerate() {
        render_row(&mut buff, table, row, &widths);
        // Separators go between rows, never after the last one.
        if bordered && idx + 1 < rows.len() {
            separator(&mut buff, border, &widths);
        }
    }

    if bordered {
        rule(
            &mut buff,
            border,
            &widths,
            border.bottom_left(),
            border.bottom_intersection(),
            border.bottom_right(),
        );
    }

    buff.as_string()
}

/// Computes the rendered width of every column.
///
/// Content widths are the maximum single-line length over the header and
/// all body rows, with cells beyond the column count ignored. Explicit
/// per-column widths are applied last and win unconditionally, even when
/// smaller than the content (that is what enables truncation).
pub(crate) fn column_widths(table: &Table) -> Vec<usize> {
    let columns = table.column_count();
    if columns == 0 {
        return Vec::new();
    }

    let mut widths = vec![0usize; columns];

    if let Some(header) = table.header() {
        for (i, cell) in header.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    for row in table.rows() {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    for (i, explicit) in table.explicit_widths().iter().take(columns).enumerate() {
        if let Some(width) = explicit {
            widths[i] = *width;
        }
    }

    widths
}

/// Renders one logical row as one or more physical lines.
///
/// Every cell is split into lines, all columns are padded to the row's
/// largest line count, and missing cells (ragged rows) become empty ones.
fn render_row(buff: &mut LineBuffer, table: &Table, row: &Row, widths: &[usize]) {
    let border = table.border();
    let bordered = border.enabled();
    let empty = Cell::default();

    let mut columns: Vec<(Vec<&str>, Alignment)> = Vec::with_capacity(widths.len());
    for i in 0..widths.len() {
        let cell = row.get(i).unwrap_or(&empty);
        let alignment = cell.alignment().unwrap_or_else(|| table.column_alignment(i));
        columns.push((cell.lines().collect(), alignment));
    }

    let max_lines = columns.iter().map(|(lines, _)| lines.len()).max().unwrap_or(1);

    for line_idx in 0..max_lines {
        if bordered {
            buff.add(border.vertical());
        }
        for (i, (lines, alignment)) in columns.iter().enumerate() {
            let text = lines.get(line_idx).copied().unwrap_or("");
            buff.add(" ");
            buff.add(&pad_cell(text, widths[i], *alignment));
            // Without a border there is no closing pad space; columns are
            // separated by the next column's single leading space.
            if bordered {
                buff.add(" ");
                buff.add(border.vertical());
            }
        }
        buff.end_line();
    }
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Overlong text is cut left-to-right regardless of alignment. A centered
/// deficit splits floor/ceil, with the odd space trailing.
pub(crate) fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.chars().take(width).collect();
    }

    let deficit = width - length;
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(deficit)),
        Alignment::Right => format!("{}{text}", " ".repeat(deficit)),
        Alignment::Center => {
            let before = deficit / 2;
            format!("{}{text}{}", " ".repeat(before), " ".repeat(deficit - before))
        }
    }
}

/// Interior separator: drawn below the header and between body rows.
fn separator(buff: &mut LineBuffer, border: &Border, widths: &[usize]) {
    rule(
        buff,
        border,
        widths,
        border.left_intersection(),
        border.cross_intersection(),
        border.right_intersection(),
    );
}

/// One horizontal rule line: a run of `width + 2` copies of the horizontal
/// glyph's first character per column, joined by `mid` and closed by the
/// given end glyphs.
fn rule(
    buff: &mut LineBuffer,
    border: &Border,
    widths: &[usize],
    left: &str,
    mid: &str,
    right: &str,
) {
    buff.add(left);
    for (i, width) in widths.iter().enumerate() {
        buff.repeat(border.horizontal(), width + 2);
        if i + 1 < widths.len() {
            buff.add(mid);
        }
    }
    buff.add(right);
    buff.end_line();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn pad_left_right_center() {
        assert_eq!(pad_cell("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(pad_cell("ab", 5, Alignment::Right), "   ab");
        assert_eq!(pad_cell("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn pad_center_even_deficit() {
        assert_eq!(pad_cell("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn pad_truncates_regardless_of_alignment() {
        assert_eq!(pad_cell("overflow", 4, Alignment::Left), "over");
        assert_eq!(pad_cell("overflow", 4, Alignment::Right), "over");
        assert_eq!(pad_cell("overflow", 4, Alignment::Center), "over");
    }

    #[test]
    fn pad_exact_fit_is_unchanged() {
        assert_eq!(pad_cell("four", 4, Alignment::Right), "four");
    }

    #[test]
    fn pad_zero_width() {
        assert_eq!(pad_cell("anything", 0, Alignment::Left), "");
        assert_eq!(pad_cell("", 0, Alignment::Center), "");
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        assert_eq!(pad_cell("héllo", 6, Alignment::Left), "héllo ");
        assert_eq!(pad_cell("héllo", 3, Alignment::Left), "hél");
    }

    #[test]
    fn widths_from_header_and_rows() {
        let mut table = Table::new();
        table.set_header(["Name", "Age"]);
        table.add_row(["Alice", "30"]);
        assert_eq!(column_widths(&table), vec![5, 3]);
    }

    #[test]
    fn widths_use_longest_cell_line() {
        let mut table = Table::new();
        table.set_header(["A"]);
        table.add_row(["short\na much longer line\nend"]);
        assert_eq!(column_widths(&table), vec![18]);
    }

    #[test]
    fn widths_ignore_cells_beyond_column_count() {
        let mut table = Table::new();
        table.set_header(["A", "B"]);
        table.add_row(["x", "y", "this extra cell never counts"]);
        assert_eq!(column_widths(&table), vec![1, 1]);
    }

    #[test]
    fn short_rows_contribute_nothing_for_missing_columns() {
        let mut table = Table::new();
        table.set_header(["A", "B"]);
        table.add_row(["wide value"]);
        assert_eq!(column_widths(&table), vec![10, 1]);
    }

    #[test]
    fn explicit_width_wins_even_when_smaller() {
        let mut table = Table::new();
        table.set_header(["Header"]);
        table.add_row(["a very long value"]);
        table.set_column_width(0, Some(4));
        assert_eq!(column_widths(&table), vec![4]);
    }

    #[test]
    fn zero_columns_yield_empty_widths() {
        let table = Table::new();
        assert!(column_widths(&table).is_empty());
    }

    #[test]
    fn widths_grow_monotonically_with_content() {
        let mut table = Table::new();
        table.set_header(["H"]);
        table.add_row(["aa"]);
        let before = column_widths(&table)[0];
        table.add_row(["aaaa"]);
        let after = column_widths(&table)[0];
        assert!(after >= before);
    }
}
