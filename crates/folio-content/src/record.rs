//! Article record value types.

use serde::{Deserialize, Serialize};

/// One authored article/page with metadata, body sections, and optional
/// FAQ entries.
///
/// Immutable once loaded; the slug is the only identity. Dates are ISO
/// 8601 date strings (`YYYY-MM-DD`) and are optional; a record without
/// dates is treated as a plain page rather than an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique identifier within the catalog.
    pub slug: String,

    /// URL path of the page (e.g. `/articles/my-post`). Appended verbatim
    /// to the site base URL to form the canonical URL.
    pub path: String,

    /// Article title. Empty means "use the site default title".
    #[serde(default)]
    pub title: String,

    /// Short description for meta tags. Empty means "use the site default".
    #[serde(default)]
    pub description: String,

    /// Ordered body sections.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Ordered FAQ entries. Empty list means no FAQ block and no FAQPage
    /// structured data.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,

    /// Ordered tag strings.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Author name. Empty means unattributed.
    #[serde(default)]
    pub author: String,

    /// Publication date (ISO 8601 date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,

    /// Last-updated date (ISO 8601 date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Whether the displayed title gets the site brand suffix.
    /// Defaults to true; records opt out explicitly.
    #[serde(default = "default_true")]
    pub suffix_brand: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ContentRecord {
    /// Matches the serde defaults: the brand suffix is on unless a
    /// record explicitly opts out.
    fn default() -> Self {
        Self {
            slug: String::new(),
            path: String::new(),
            title: String::new(),
            description: String::new(),
            sections: Vec::new(),
            faq: Vec::new(),
            tags: Vec::new(),
            author: String::new(),
            published: None,
            updated: None,
            suffix_brand: true,
        }
    }
}

impl ContentRecord {
    /// Whether the record carries publish/update dates.
    ///
    /// Dated records are described as `article` in Open Graph metadata
    /// and get an Article structured-data object.
    #[must_use]
    pub fn is_dated(&self) -> bool {
        has_value(self.published.as_deref()) || has_value(self.updated.as_deref())
    }
}

/// Return true if an optional string is present and non-blank.
fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// One body section: a heading plus author-authored markdown-lite text.
///
/// The body is semi-trusted and parsed fresh on every render; there is
/// no cached parse state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading (plain text, escaped but never inline-formatted).
    pub heading: String,
    /// Raw section body in the supported markdown-lite subset.
    pub body: String,
}

/// One FAQ question/answer pair.
///
/// Used both for on-page rendering and for the FAQPage structured-data
/// object; the mapping is 1:1 with no separate lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question text (plain).
    pub question: String,
    /// Answer text in the supported markdown-lite subset.
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dated_with_published() {
        let record = ContentRecord {
            published: Some("2024-03-01".to_owned()),
            ..Default::default()
        };
        assert!(record.is_dated());
    }

    #[test]
    fn test_is_dated_with_updated_only() {
        let record = ContentRecord {
            updated: Some("2024-04-01".to_owned()),
            ..Default::default()
        };
        assert!(record.is_dated());
    }

    #[test]
    fn test_is_dated_without_dates() {
        let record = ContentRecord::default();
        assert!(!record.is_dated());
    }

    #[test]
    fn test_is_dated_blank_date_does_not_count() {
        let record = ContentRecord {
            published: Some("   ".to_owned()),
            ..Default::default()
        };
        assert!(!record.is_dated());
    }

    #[test]
    fn test_default_record_keeps_brand_suffix() {
        // Default and deserialization must agree: suffix on unless the
        // record opts out.
        assert!(ContentRecord::default().suffix_brand);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"slug": "hello", "path": "/articles/hello"}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slug, "hello");
        assert_eq!(record.path, "/articles/hello");
        assert!(record.title.is_empty());
        assert!(record.sections.is_empty());
        assert!(record.faq.is_empty());
        assert!(record.suffix_brand, "brand suffix defaults on");
    }

    #[test]
    fn test_deserialize_suffix_brand_opt_out() {
        let json = r#"{"slug": "s", "path": "/s", "suffix_brand": false}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert!(!record.suffix_brand);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "slug": "guide",
            "path": "/articles/guide",
            "title": "A Guide",
            "description": "How to do the thing",
            "sections": [{"heading": "Intro", "body": "Hello **world**"}],
            "faq": [{"question": "Why?", "answer": "Because."}],
            "tags": ["howto", "guide"],
            "author": "Sam Writer",
            "published": "2024-03-01",
            "updated": "2024-05-09"
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sections.len(), 1);
        assert_eq!(record.sections[0].heading, "Intro");
        assert_eq!(record.faq[0].question, "Why?");
        assert_eq!(record.tags, vec!["howto", "guide"]);
        assert!(record.is_dated());
    }
}
