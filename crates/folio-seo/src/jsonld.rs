//! schema.org JSON-LD objects and script-context-safe serialization.

use serde::Serialize;

/// Error type for structured-data serialization.
///
/// Serialization only fails on malformed input data; the builder's own
/// structs are plain acyclic values and always serialize.
#[derive(Debug, thiserror::Error)]
pub enum SeoError {
    /// JSON serialization error.
    #[error("JSON-LD serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// schema.org Article object.
///
/// Optional fields are emitted individually: an absent date or author
/// is omitted from the JSON entirely, never serialized as null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArticleLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Article headline (resolved title without the brand suffix).
    pub headline: String,
    /// Canonical URL of the article page.
    #[serde(rename = "mainEntityOfPage")]
    pub main_entity_of_page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonLd>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl ArticleLd {
    /// Create an Article object with only the required fields set.
    #[must_use]
    pub fn new(headline: String, canonical_url: String) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Article",
            headline,
            main_entity_of_page: canonical_url,
            description: None,
            date_published: None,
            date_modified: None,
            author: None,
            keywords: Vec::new(),
        }
    }
}

/// schema.org Person object (article author).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Author name.
    pub name: String,
}

impl PersonLd {
    /// Create a Person object.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            kind: "Person",
            name,
        }
    }
}

/// schema.org FAQPage object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaqPageLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Question entries in source order.
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<QuestionLd>,
}

impl FaqPageLd {
    /// Create a FAQPage from question entries.
    #[must_use]
    pub fn new(main_entity: Vec<QuestionLd>) -> Self {
        Self {
            context: "https://schema.org",
            kind: "FAQPage",
            main_entity,
        }
    }
}

/// schema.org Question object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Question text.
    pub name: String,
    /// Accepted answer.
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: AnswerLd,
}

impl QuestionLd {
    /// Create a Question/Answer pair.
    #[must_use]
    pub fn new(question: String, answer: String) -> Self {
        Self {
            kind: "Question",
            name: question,
            accepted_answer: AnswerLd {
                kind: "Answer",
                text: answer,
            },
        }
    }
}

/// schema.org Answer object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Answer text.
    pub text: String,
}

/// Serialize a value as JSON safe for embedding in a `<script>` element.
///
/// Every case-insensitive occurrence of `</script` in the serialized
/// string gets a backslash inserted before the slash (`<\/script`),
/// which is a JSON no-op but prevents the payload from terminating the
/// embedding script context.
///
/// # Errors
///
/// Returns [`SeoError::Serialize`] if the value cannot be serialized;
/// callers are expected to supply acyclic plain data.
pub fn to_script_json<T: Serialize>(value: &T) -> Result<String, SeoError> {
    let json = serde_json::to_string(value)?;
    Ok(escape_script_close(&json))
}

/// Insert `\` before the slash of each case-insensitive `</script`.
fn escape_script_close(json: &str) -> String {
    const NEEDLE: &[u8] = b"</script";

    // Compare bytes rather than slicing the &str: the 8 bytes after a
    // `<` may end inside a multi-byte character.
    let bytes = json.as_bytes();
    let mut out = String::with_capacity(json.len() + 8);
    let mut last = 0;
    for (pos, _) in json.match_indices('<') {
        let matched = bytes
            .get(pos..pos + NEEDLE.len())
            .is_some_and(|tail| tail.eq_ignore_ascii_case(NEEDLE));
        if matched {
            // The matched region is all ASCII, so these str slices are
            // on char boundaries.
            out.push_str(&json[last..pos]);
            out.push_str("<\\");
            // keep the original casing of "/script"
            out.push_str(&json[pos + 1..pos + NEEDLE.len()]);
            last = pos + NEEDLE.len();
        }
    }
    out.push_str(&json[last..]);
    out
}
