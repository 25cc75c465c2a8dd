//! In-memory content catalog.

use std::collections::HashMap;

use crate::record::ContentRecord;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// JSON decode error.
    #[error("Failed to decode catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, read-only collection of content records.
///
/// Records keep their supplied order (used for listings and related-post
/// queries); slug lookup goes through an index built at load time.
/// Duplicate slugs keep the first record and log a warning.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalog {
    records: Vec<ContentRecord>,
    by_slug: HashMap<String, usize>,
}

impl ContentCatalog {
    /// Build a catalog from fully materialized records.
    #[must_use]
    pub fn from_records(records: Vec<ContentRecord>) -> Self {
        let mut by_slug = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_slug.contains_key(&record.slug) {
                tracing::warn!(slug = %record.slug, "Duplicate slug in catalog, keeping first");
            } else {
                by_slug.insert(record.slug.clone(), index);
            }
        }
        tracing::debug!(record_count = records.len(), "Content catalog loaded");
        Self { records, by_slug }
    }

    /// Decode a catalog from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the JSON is malformed or does not
    /// match the record shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ContentRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Look up a record by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ContentRecord> {
        self.by_slug.get(slug).map(|&i| &self.records[i])
    }

    /// All records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records related to the given slug: every other record in catalog
    /// order, capped at `limit`.
    ///
    /// This is a read-only exclusion lookup, not an owned relationship:
    /// the current record is skipped, nothing else is ranked.
    #[must_use]
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&ContentRecord> {
        self.records
            .iter()
            .filter(|r| r.slug != slug)
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContentCatalog {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
