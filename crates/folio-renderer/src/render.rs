//! Section and record rendering: segmentation dispatch and ordering.

use folio_content::{ContentRecord, Section};
use rayon::prelude::*;

use crate::inline::{Inline, parse_inline};
use crate::segment::{Block, segment};
use crate::table::{TableNode, parse_table};

/// One renderable unit of a section body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BodyNode {
    /// A paragraph of inline nodes.
    Paragraph(Vec<Inline>),
    /// A parsed pipe table.
    Table(TableNode),
}

/// A rendered section: escaped-on-emit heading plus ordered body nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedSection {
    /// Section heading, kept raw here; the HTML writer escapes it and
    /// never applies inline formatting to headings.
    pub heading: String,
    /// Body nodes in document order.
    pub nodes: Vec<BodyNode>,
}

/// Render one section body into ordered nodes.
///
/// Segments the body and dispatches each block exhaustively: tables
/// through the table parser, everything else through the full inline
/// pass. Block order is document order.
#[must_use]
pub fn render_body(body: &str) -> Vec<BodyNode> {
    segment(body)
        .into_iter()
        .map(|block| match block {
            Block::Table(raw) => BodyNode::Table(parse_table(raw)),
            Block::Paragraph(raw) => BodyNode::Paragraph(parse_inline(raw)),
        })
        .collect()
}

/// Render an ordered slice of sections.
///
/// Sections are independent, so they render in parallel; results are
/// collected back in input order.
#[must_use]
pub fn render_sections(sections: &[Section]) -> Vec<RenderedSection> {
    sections
        .par_iter()
        .map(|section| RenderedSection {
            heading: section.heading.clone(),
            nodes: render_body(&section.body),
        })
        .collect()
}

/// Render a full record: its sections followed by an FAQ section when
/// FAQ entries exist.
///
/// Each FAQ entry becomes a bold question paragraph followed by the
/// answer through the full paragraph pipeline, so the on-page FAQ and
/// the FAQPage structured data come from the same entries.
#[must_use]
pub fn render_record(record: &ContentRecord) -> Vec<RenderedSection> {
    let mut sections = render_sections(&record.sections);
    if !record.faq.is_empty() {
        sections.push(render_faq(record));
    }
    tracing::debug!(
        slug = %record.slug,
        section_count = sections.len(),
        faq_count = record.faq.len(),
        "Record rendered"
    );
    sections
}

fn render_faq(record: &ContentRecord) -> RenderedSection {
    let mut nodes = Vec::with_capacity(record.faq.len() * 2);
    for entry in &record.faq {
        nodes.push(BodyNode::Paragraph(vec![Inline::Bold(
            entry.question.clone(),
        )]));
        nodes.push(BodyNode::Paragraph(parse_inline(&entry.answer)));
    }
    RenderedSection {
        heading: "Frequently asked questions".to_owned(),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use folio_content::FaqEntry;
    use pretty_assertions::assert_eq;

    use super::*;

    fn section(heading: &str, body: &str) -> Section {
        Section {
            heading: heading.to_owned(),
            body: body.to_owned(),
        }
    }

    #[test]
    fn test_scenario_paragraph_then_table() {
        let nodes = render_body("Intro text.\n\n| H1 | H2 |\n|---|---|\n| a | b |");
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes[0],
            BodyNode::Paragraph(vec![Inline::Text("Intro text.".to_owned())])
        );
        let BodyNode::Table(table) = &nodes[1] else {
            panic!("expected table node");
        };
        assert_eq!(
            table.headers,
            vec![
                vec![Inline::Text("H1".to_owned())],
                vec![Inline::Text("H2".to_owned())],
            ]
        );
        assert_eq!(
            table.rows,
            vec![vec![
                vec![Inline::Text("a".to_owned())],
                vec![Inline::Text("b".to_owned())],
            ]]
        );
    }

    #[test]
    fn test_block_count_and_order_preserved() {
        let nodes = render_body("one\n\ntwo\n\nthree");
        assert_eq!(nodes.len(), 3);
        let texts: Vec<_> = nodes
            .iter()
            .map(|n| match n {
                BodyNode::Paragraph(inlines) => inlines.clone(),
                BodyNode::Table(_) => panic!("unexpected table"),
            })
            .collect();
        assert_eq!(texts[0], vec![Inline::Text("one".to_owned())]);
        assert_eq!(texts[1], vec![Inline::Text("two".to_owned())]);
        assert_eq!(texts[2], vec![Inline::Text("three".to_owned())]);
    }

    #[test]
    fn test_sections_keep_input_order() {
        let sections = vec![
            section("First", "a"),
            section("Second", "b"),
            section("Third", "c"),
        ];
        let rendered = render_sections(&sections);
        let headings: Vec<&str> = rendered.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_section_with_empty_body() {
        let rendered = render_sections(&[section("Empty", "")]);
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].nodes.is_empty());
    }

    #[test]
    fn test_record_without_faq_has_no_faq_section() {
        let record = ContentRecord {
            sections: vec![section("Only", "text")],
            ..Default::default()
        };
        let rendered = render_record(&record);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].heading, "Only");
    }

    #[test]
    fn test_record_faq_appended_in_order() {
        let record = ContentRecord {
            sections: vec![section("Body", "text")],
            faq: vec![
                FaqEntry {
                    question: "First?".to_owned(),
                    answer: "Yes.".to_owned(),
                },
                FaqEntry {
                    question: "Second?".to_owned(),
                    answer: "Also *yes*.".to_owned(),
                },
            ],
            ..Default::default()
        };
        let rendered = render_record(&record);
        assert_eq!(rendered.len(), 2);

        let faq = &rendered[1];
        assert_eq!(faq.nodes.len(), 4);
        assert_eq!(
            faq.nodes[0],
            BodyNode::Paragraph(vec![Inline::Bold("First?".to_owned())])
        );
        assert_eq!(
            faq.nodes[3],
            BodyNode::Paragraph(vec![
                Inline::Text("Also ".to_owned()),
                Inline::Italic("yes".to_owned()),
                Inline::Text(".".to_owned()),
            ])
        );
    }
}
