//! Structured metadata for folio pages.
//!
//! Builds the head-level view of a content record: canonical URL,
//! resolved title/description, the Open Graph / Twitter tag set, and
//! schema.org Article / FAQPage JSON-LD objects.
//!
//! The one hard security invariant lives here: JSON-LD built from
//! author-influenced strings is serialized through [`to_script_json`],
//! which escapes `</script` (case-insensitively) so the payload can
//! never terminate the `<script>` context it is embedded in.

mod head;
mod jsonld;
mod metadata;

pub use head::render_head;
pub use jsonld::{
    AnswerLd, ArticleLd, FaqPageLd, PersonLd, QuestionLd, SeoError, to_script_json,
};
pub use metadata::{MetaAttribute, MetaTag, StructuredMetadata, build_metadata};
