//! Trusted HTML writer for the node tree.
//!
//! The only place markup is produced. Every text node passes through
//! [`escape_html`] on emission, so nothing upstream of this module has
//! to handle a trust boundary.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::inline::Inline;
use crate::render::{BodyNode, RenderedSection};
use crate::table::TableNode;

/// Render a sequence of sections to an HTML fragment.
///
/// Headings become `<h2>` (escaped, never inline-formatted), body nodes
/// follow in document order.
#[must_use]
pub fn render_html(sections: &[RenderedSection]) -> String {
    let mut out = String::with_capacity(sections.len() * 256);
    for section in sections {
        write!(out, "<h2>{}</h2>", escape_html(&section.heading)).unwrap();
        write_body(&section.nodes, &mut out);
    }
    out
}

/// Render body nodes alone (no heading) to an HTML fragment.
#[must_use]
pub fn render_html_body(nodes: &[BodyNode]) -> String {
    let mut out = String::with_capacity(nodes.len() * 128);
    write_body(nodes, &mut out);
    out
}

fn write_body(nodes: &[BodyNode], out: &mut String) {
    for node in nodes {
        match node {
            BodyNode::Paragraph(inlines) => {
                out.push_str("<p>");
                write_inlines(inlines, out);
                out.push_str("</p>");
            }
            BodyNode::Table(table) => write_table(table, out),
        }
    }
}

fn write_inlines(inlines: &[Inline], out: &mut String) {
    for node in inlines {
        match node {
            Inline::Text(t) => out.push_str(&escape_html(t)),
            Inline::Bold(t) => write!(out, "<strong>{}</strong>", escape_html(t)).unwrap(),
            Inline::Italic(t) => write!(out, "<em>{}</em>", escape_html(t)).unwrap(),
            Inline::Code(t) => {
                write!(out, r#"<code class="inline-code">{}</code>"#, escape_html(t)).unwrap();
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

fn write_table(table: &TableNode, out: &mut String) {
    out.push_str("<table><thead><tr>");
    for cell in &table.headers {
        out.push_str("<th>");
        write_inlines(cell, out);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            write_inlines(cell, out);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::render::render_body;

    fn section(heading: &str, body: &str) -> RenderedSection {
        RenderedSection {
            heading: heading.to_owned(),
            nodes: render_body(body),
        }
    }

    #[test]
    fn test_paragraph_html() {
        let html = render_html_body(&render_body("**b** and *i* and `c`"));
        assert_eq!(
            html,
            r#"<p><strong>b</strong> and <em>i</em> and <code class="inline-code">c</code></p>"#
        );
    }

    #[test]
    fn test_line_break_html() {
        let html = render_html_body(&render_body("one\ntwo"));
        assert_eq!(html, "<p>one<br>two</p>");
    }

    #[test]
    fn test_heading_escaped_not_formatted() {
        let html = render_html(&[section("Costs <2024> **raw**", "")]);
        assert_eq!(html, "<h2>Costs &lt;2024&gt; **raw**</h2>");
    }

    #[test]
    fn test_text_escaped_on_emit() {
        let html = render_html_body(&render_body("a <script>alert(1)</script> & \"q\""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("&quot;q&quot;"));
    }

    #[test]
    fn test_emphasis_content_escaped() {
        let html = render_html_body(&render_body("**<b>**"));
        assert_eq!(html, "<p><strong>&lt;b&gt;</strong></p>");
    }

    #[test]
    fn test_table_html() {
        let html = render_html_body(&render_body("| H1 | H2 |\n|---|---|\n| a | b |"));
        assert_eq!(
            html,
            "<table><thead><tr><th>H1</th><th>H2</th></tr></thead>\
             <tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_table_cell_escaped() {
        let html = render_html_body(&render_body("| <x> | b |\n|---|---|\n| 1 | 2 |"));
        assert!(html.contains("<th>&lt;x&gt;</th>"));
    }

    #[test]
    fn test_ragged_rows_emit_short_and_long() {
        let html = render_html_body(&render_body("| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |"));
        assert!(html.contains("<tr><td>1</td></tr>"));
        assert!(html.contains("<tr><td>1</td><td>2</td><td>3</td></tr>"));
    }

    #[test]
    fn test_sections_in_order() {
        let html = render_html(&[section("One", "a"), section("Two", "b")]);
        assert_eq!(html, "<h2>One</h2><p>a</p><h2>Two</h2><p>b</p>");
    }
}
