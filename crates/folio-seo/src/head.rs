//! Head fragment rendering for structured metadata.

use std::fmt::Write;

use folio_renderer::escape_html;

use crate::jsonld::SeoError;
use crate::metadata::{MetaAttribute, StructuredMetadata};

/// Render a metadata view as an HTML head fragment.
///
/// Emits the title element, canonical link, meta tags, and one
/// `<script type="application/ld+json">` block per present JSON-LD
/// object, each on its own line. All attribute values and the title are
/// entity-escaped; the JSON-LD payloads go through the script-safe
/// serializer instead, since entity-escaping inside a script context
/// would corrupt the JSON.
///
/// # Errors
///
/// Returns [`SeoError`] if JSON-LD serialization fails.
pub fn render_head(meta: &StructuredMetadata) -> Result<String, SeoError> {
    let mut out = String::with_capacity(1024);

    writeln!(out, "<title>{}</title>", escape_html(&meta.title)).unwrap();
    writeln!(
        out,
        r#"<link rel="canonical" href="{}">"#,
        escape_html(&meta.canonical_url)
    )
    .unwrap();
    writeln!(
        out,
        r#"<meta name="description" content="{}">"#,
        escape_html(&meta.description)
    )
    .unwrap();

    for tag in &meta.meta_tags {
        let attr = match tag.attribute {
            MetaAttribute::Property => "property",
            MetaAttribute::Name => "name",
        };
        writeln!(
            out,
            r#"<meta {attr}="{}" content="{}">"#,
            escape_html(&tag.key),
            escape_html(&tag.content)
        )
        .unwrap();
    }

    for payload in meta.json_ld_payloads()? {
        writeln!(
            out,
            r#"<script type="application/ld+json">{payload}</script>"#
        )
        .unwrap();
    }

    Ok(out)
}
