//! Aligned table output

use std::io::{self, Write};

use termcolor::WriteColor;

use super::ansi::{pad_to_width, strip_ansi, visible_length};

/// Pre-formatted cells of one output line.
pub type Row = Vec<String>;

/// How a batch of rows is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Cells padded to their column width, separated by one space.
    Flat,
    /// `Flat`, indented by one space under a directory header.
    Grouped,
    /// Single-column rows written verbatim.
    Tree,
}

/// Maximum visible width of each column across `rows`.
pub fn column_widths(rows: &[Row]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(visible_length(cell));
        }
    }
    widths
}

/// Write `rows` to `out`. Escape sequences are stripped when `out` has no color support.
pub fn render_table<W: WriteColor>(out: &mut W, rows: &[Row], layout: TableLayout) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let use_color = out.supports_color();
    let plain: Vec<Row>;
    let rows = if use_color {
        rows
    } else {
        plain = rows
            .iter()
            .map(|row| row.iter().map(|cell| strip_ansi(cell).into_owned()).collect())
            .collect();
        &plain
    };

    if layout == TableLayout::Tree {
        for row in rows {
            writeln!(out, "{}", row.concat())?;
        }
        return Ok(());
    }

    let widths = column_widths(rows);
    for row in rows {
        if layout == TableLayout::Grouped {
            write!(out, " ")?;
        }
        for (i, cell) in row.iter().enumerate() {
            write!(out, "{}", pad_to_width(cell, widths[i]))?;
            if i < row.len() - 1 {
                write!(out, " ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
