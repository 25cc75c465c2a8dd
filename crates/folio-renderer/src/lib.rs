//! Markdown-lite rendering core.
//!
//! Converts semi-trusted authored text (article bodies, FAQ answers)
//! into a typed node tree and, through a trusted writer, into safe HTML
//! fragments.
//!
//! # Architecture
//!
//! The pipeline is a chain of pure functions:
//!
//! 1. [`segment`] splits a body into ordered [`Block`]s (table or
//!    paragraph) on blank-line boundaries.
//! 2. [`parse_inline`] / [`parse_table`] turn each block into
//!    [`Inline`] / [`TableNode`] trees. No HTML exists at this stage,
//!    so the transformation logic carries no trust boundary.
//! 3. [`render_html`] converts the node tree to markup, escaping every
//!    text node on emission.
//!
//! Only a fixed inline subset is supported: `**bold**`, `*italic*`,
//! `` `code` ``, and explicit line breaks. This is deliberately not a
//! CommonMark parser: no lists, links, blockquotes, or nested
//! emphasis.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{render_body, BodyNode};
//!
//! let body = "Intro text.\n\n| H1 | H2 |\n|---|---|\n| a | b |";
//! let nodes = render_body(body);
//! assert_eq!(nodes.len(), 2);
//! assert!(matches!(nodes[1], BodyNode::Table(_)));
//! ```

mod escape;
mod html;
mod inline;
mod render;
mod segment;
mod table;

pub use escape::escape_html;
pub use html::{render_html, render_html_body};
pub use inline::{Inline, parse_cell, parse_inline};
pub use render::{BodyNode, RenderedSection, render_body, render_record, render_sections};
pub use segment::{Block, segment};
pub use table::{TableNode, parse_table};
