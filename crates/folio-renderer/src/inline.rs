//! Inline formatting: the fixed markdown-lite emphasis subset.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// One inline node. Emphasis does not nest: each variant wraps plain
/// text, never other nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Inline {
    /// Plain text (unescaped; the HTML writer escapes on emission).
    Text(String),
    /// `**bold**` span.
    Bold(String),
    /// `*italic*` span.
    Italic(String),
    /// `` `code` `` span.
    Code(String),
    /// Explicit line break from a newline inside a paragraph.
    LineBreak,
}

/// Parse text with the full inline subset: bold, italic, code, line
/// breaks, applied in that order.
///
/// Bold runs before italic so the double-asterisk delimiters are
/// consumed before the single-asterisk pass can mis-split them.
/// Matching is non-greedy; unmatched delimiters stay literal. Empty
/// enclosed text (`** **`) produces an empty span rather than being
/// special-cased. `***x***` is unsupported input: the bold pass
/// consumes the outermost pair and any leftover asterisk renders
/// literally.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let nodes = vec![Inline::Text(text.to_owned())];
    let nodes = apply_pass(nodes, &BOLD, Inline::Bold);
    let nodes = apply_pass(nodes, &ITALIC, Inline::Italic);
    let nodes = apply_pass(nodes, &CODE, Inline::Code);
    split_line_breaks(nodes)
}

/// Parse a table cell with the restricted inline subset: bold only.
///
/// Italic and code delimiters render literally inside cells, matching
/// the header/cell styling used for tables.
#[must_use]
pub fn parse_cell(text: &str) -> Vec<Inline> {
    apply_pass(vec![Inline::Text(text.to_owned())], &BOLD, Inline::Bold)
}

/// Run one delimiter pass over the current node list, splitting only
/// `Text` nodes. Already-wrapped spans are left untouched.
fn apply_pass(nodes: Vec<Inline>, pattern: &Regex, wrap: fn(String) -> Inline) -> Vec<Inline> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Inline::Text(text) => split_matches(&text, pattern, wrap, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn split_matches(text: &str, pattern: &Regex, wrap: fn(String) -> Inline, out: &mut Vec<Inline>) {
    let mut last = 0;
    for caps in pattern.captures_iter(text) {
        let Some(full) = caps.get(0) else { continue };
        let inner = caps.get(1).map_or("", |g| g.as_str());
        if full.start() > last {
            out.push(Inline::Text(text[last..full.start()].to_owned()));
        }
        out.push(wrap(inner.to_owned()));
        last = full.end();
    }
    if last < text.len() {
        out.push(Inline::Text(text[last..].to_owned()));
    }
}

/// Replace newlines inside `Text` nodes with `LineBreak` nodes.
fn split_line_breaks(nodes: Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Inline::Text(text) if text.contains('\n') => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        out.push(Inline::LineBreak);
                    }
                    if !part.is_empty() {
                        out.push(Inline::Text(part.to_owned()));
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}
