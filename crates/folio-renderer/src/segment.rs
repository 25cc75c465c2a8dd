//! Block segmentation: blank-line splitting and table classification.

use std::sync::LazyLock;

use regex::Regex;

/// Two or more consecutive newlines collapse to one split point.
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// A table separator row: dashes, pipes, and whitespace only.
static SEPARATOR_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s|\-]+$").unwrap());

/// A classified unit of a section body.
///
/// Produced once by [`segment`] and consumed via exhaustive matching in
/// the renderer dispatch; blocks are never re-sniffed downstream.
/// Variants borrow the raw chunk text; parsing into cells or inline
/// nodes happens in the table/paragraph renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    /// A pipe table chunk (header, separator, data rows).
    Table(&'a str),
    /// Everything else: rendered as one paragraph.
    Paragraph(&'a str),
}

/// Split a section body into ordered blocks.
///
/// Chunks are separated by blank lines (two or more consecutive
/// newlines). A chunk is a table when it contains at least one pipe,
/// its second non-empty line is a separator row (dashes/pipes/
/// whitespace with at least one dash), and it has at least three
/// non-empty lines. Anything else is a paragraph with its raw text
/// preserved. Pure function; chunk order is document order.
#[must_use]
pub fn segment(body: &str) -> Vec<Block<'_>> {
    BLANK_LINES
        .split(body)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            if is_table_chunk(chunk) {
                Block::Table(chunk)
            } else {
                Block::Paragraph(chunk)
            }
        })
        .collect()
}

fn is_table_chunk(chunk: &str) -> bool {
    if !chunk.contains('|') {
        return false;
    }
    let lines: Vec<&str> = chunk.lines().filter(|l| !l.trim().is_empty()).collect();
    // Fewer than header + separator + one data row is never a table.
    if lines.len() < 3 {
        return false;
    }
    let separator = lines[1];
    SEPARATOR_ROW.is_match(separator) && separator.contains('-')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TABLE: &str = "| A | B |\n|---|---|\n| 1 | 2 |";

    #[test]
    fn test_single_paragraph() {
        assert_eq!(segment("hello world"), vec![Block::Paragraph("hello world")]);
    }

    #[test]
    fn test_split_on_blank_lines() {
        assert_eq!(
            segment("one\n\ntwo\n\n\nthree"),
            vec![
                Block::Paragraph("one"),
                Block::Paragraph("two"),
                Block::Paragraph("three"),
            ]
        );
    }

    #[test]
    fn test_single_newline_does_not_split() {
        assert_eq!(
            segment("line one\nline two"),
            vec![Block::Paragraph("line one\nline two")]
        );
    }

    #[test]
    fn test_table_detected() {
        assert_eq!(segment(TABLE), vec![Block::Table(TABLE)]);
    }

    #[test]
    fn test_paragraph_then_table() {
        let body = format!("Intro text.\n\n{TABLE}");
        assert_eq!(
            segment(&body),
            vec![Block::Paragraph("Intro text."), Block::Table(TABLE)]
        );
    }

    #[test]
    fn test_pipes_without_separator_is_paragraph() {
        let chunk = "a | b\nc | d\ne | f";
        assert_eq!(segment(chunk), vec![Block::Paragraph(chunk)]);
    }

    #[test]
    fn test_two_line_chunk_with_pipes_is_paragraph() {
        // Header + separator but no data row: falls back to paragraph,
        // raw text preserved.
        let chunk = "| A | B |\n|---|---|";
        assert_eq!(segment(chunk), vec![Block::Paragraph(chunk)]);
    }

    #[test]
    fn test_separator_must_be_second_nonempty_line() {
        let chunk = "| A | B |\n| 1 | 2 |\n|---|---|";
        assert_eq!(segment(chunk), vec![Block::Paragraph(chunk)]);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(segment(""), Vec::<Block<'_>>::new());
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_ignored() {
        assert_eq!(segment("\n\nonly\n\n"), vec![Block::Paragraph("only")]);
    }

    #[test]
    fn test_order_preserved() {
        let body = format!("p1\n\n{TABLE}\n\np2");
        let blocks = segment(&body);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::Paragraph("p1")));
        assert!(matches!(blocks[1], Block::Table(_)));
        assert!(matches!(blocks[2], Block::Paragraph("p2")));
    }
}
