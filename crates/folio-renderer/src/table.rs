//! Pipe-table parsing into a row-major cell matrix.

use crate::inline::{Inline, parse_cell};

/// A parsed table: header cells plus row-major data cells.
///
/// Cell counts are not reconciled: ragged rows keep exactly the cells
/// they had in the source (no padding, no truncation), and the HTML
/// writer emits short or long rows as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableNode {
    /// Header cells, each a parsed inline sequence (bold-only subset).
    pub headers: Vec<Vec<Inline>>,
    /// Data rows in document order.
    pub rows: Vec<Vec<Vec<Inline>>>,
}

/// Parse a table chunk classified by the segmenter.
///
/// The first non-empty line is the header row, the second (the
/// separator) is discarded entirely, and every later non-empty line is
/// a data row. Never fails: a degenerate chunk produces an empty or
/// partial table rather than an error.
#[must_use]
pub fn parse_table(raw: &str) -> TableNode {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());

    let headers = lines.next().map(split_row).unwrap_or_default();
    let _separator = lines.next();
    let rows = lines.map(split_row).collect();

    TableNode { headers, rows }
}

/// Split one table line into parsed cells.
///
/// Cells are split on `|` and trimmed. An empty first/last cell is
/// dropped only when it is an artifact of the line starting/ending with
/// a pipe delimiter; interior empty cells are genuine and preserved.
fn split_row(line: &str) -> Vec<Vec<Inline>> {
    let trimmed = line.trim();
    let mut cells: Vec<&str> = trimmed.split('|').map(str::trim).collect();

    if trimmed.starts_with('|') && cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if trimmed.ends_with('|') && cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }

    cells.into_iter().map(parse_cell).collect()
}
