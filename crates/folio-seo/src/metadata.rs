//! Structured metadata assembly from a content record.

use folio_config::SiteConfig;
use folio_content::ContentRecord;

use crate::jsonld::{ArticleLd, FaqPageLd, PersonLd, QuestionLd, SeoError, to_script_json};

/// Which HTML attribute carries the tag key.
///
/// Open Graph uses `property=`, Twitter card tags use `name=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttribute {
    /// `<meta property="…" content="…">`
    Property,
    /// `<meta name="…" content="…">`
    Name,
}

/// One head-level meta tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    /// Attribute kind carrying the key.
    pub attribute: MetaAttribute,
    /// Tag key (e.g. `og:title`).
    pub key: String,
    /// Tag content.
    pub content: String,
}

impl MetaTag {
    fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key: key.to_owned(),
            content: content.into(),
        }
    }

    fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key: key.to_owned(),
            content: content.into(),
        }
    }
}

/// Derived head-level view of a content record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredMetadata {
    /// Canonical URL: site base URL + record path, exact concatenation.
    pub canonical_url: String,
    /// Resolved displayed title (brand-suffixed unless opted out).
    pub title: String,
    /// Resolved description.
    pub description: String,
    /// Resolved `og:type`.
    pub og_type: String,
    /// Open Graph / Twitter tags in emission order.
    pub meta_tags: Vec<MetaTag>,
    /// Article object; present only for dated records.
    pub article: Option<ArticleLd>,
    /// FAQPage object; present only when the record has FAQ entries.
    pub faq: Option<FaqPageLd>,
}

impl StructuredMetadata {
    /// Serialize the present JSON-LD objects for script embedding.
    ///
    /// # Errors
    ///
    /// Returns [`SeoError`] if serialization fails.
    pub fn json_ld_payloads(&self) -> Result<Vec<String>, SeoError> {
        let mut payloads = Vec::with_capacity(2);
        if let Some(article) = &self.article {
            payloads.push(to_script_json(article)?);
        }
        if let Some(faq) = &self.faq {
            payloads.push(to_script_json(faq)?);
        }
        Ok(payloads)
    }
}

/// Build the structured metadata for one record.
///
/// Fallback rules: empty record title/description fall back to the site
/// defaults; the displayed title gets the brand suffix unless the
/// record opts out; `og:type` is `article` for dated records, else the
/// configured default. Article fields are emitted individually: only
/// non-empty source data appears in the output.
#[must_use]
pub fn build_metadata(record: &ContentRecord, site: &SiteConfig) -> StructuredMetadata {
    let base_title = if record.title.is_empty() {
        site.default_title.clone()
    } else {
        record.title.clone()
    };
    let title = if record.suffix_brand {
        format!("{base_title} | {}", site.brand)
    } else {
        base_title.clone()
    };
    let description = if record.description.is_empty() {
        site.default_description.clone()
    } else {
        record.description.clone()
    };
    let canonical_url = format!("{}{}", site.base_url, record.path);
    let og_type = if record.is_dated() {
        "article".to_owned()
    } else {
        site.default_og_type.clone()
    };

    let meta_tags = build_meta_tags(record, site, &title, &description, &canonical_url, &og_type);
    let article = record.is_dated().then(|| build_article(record, &base_title, &canonical_url, &description));
    let faq = build_faq(record);

    StructuredMetadata {
        canonical_url,
        title,
        description,
        og_type,
        meta_tags,
        article,
        faq,
    }
}

fn build_meta_tags(
    record: &ContentRecord,
    site: &SiteConfig,
    title: &str,
    description: &str,
    canonical_url: &str,
    og_type: &str,
) -> Vec<MetaTag> {
    let mut tags = vec![
        MetaTag::property("og:title", title),
        MetaTag::property("og:description", description),
        MetaTag::property("og:url", canonical_url),
        MetaTag::property("og:type", og_type),
        MetaTag::property("og:site_name", site.brand.clone()),
    ];
    if !site.default_image.is_empty() {
        tags.push(MetaTag::property("og:image", site.default_image.clone()));
    }
    if let Some(published) = non_blank(record.published.as_deref()) {
        tags.push(MetaTag::property("article:published_time", published));
    }
    if let Some(updated) = non_blank(record.updated.as_deref()) {
        tags.push(MetaTag::property("article:modified_time", updated));
    }
    if !record.author.is_empty() {
        tags.push(MetaTag::property("article:author", record.author.clone()));
    }
    for tag in &record.tags {
        tags.push(MetaTag::property("article:tag", tag.clone()));
    }
    tags.push(MetaTag::name("twitter:card", "summary_large_image"));
    tags.push(MetaTag::name("twitter:title", title));
    tags.push(MetaTag::name("twitter:description", description));
    if !site.default_image.is_empty() {
        tags.push(MetaTag::name("twitter:image", site.default_image.clone()));
    }
    tags
}

fn build_article(
    record: &ContentRecord,
    headline: &str,
    canonical_url: &str,
    description: &str,
) -> ArticleLd {
    let mut article = ArticleLd::new(headline.to_owned(), canonical_url.to_owned());
    if !description.is_empty() {
        article.description = Some(description.to_owned());
    }
    article.date_published = non_blank(record.published.as_deref()).map(str::to_owned);
    article.date_modified = non_blank(record.updated.as_deref()).map(str::to_owned);
    if !record.author.is_empty() {
        article.author = Some(PersonLd::new(record.author.clone()));
    }
    article.keywords = record.tags.clone();
    article
}

fn build_faq(record: &ContentRecord) -> Option<FaqPageLd> {
    if record.faq.is_empty() {
        return None;
    }
    let entries = record
        .faq
        .iter()
        .map(|e| QuestionLd::new(e.question.clone(), e.answer.clone()))
        .collect();
    Some(FaqPageLd::new(entries))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
