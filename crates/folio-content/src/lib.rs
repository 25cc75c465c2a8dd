//! Content catalog data model.
//!
//! Provides the value types consumed by the rendering pipeline
//! ([`ContentRecord`], [`Section`], [`FaqEntry`]) and an in-memory
//! [`ContentCatalog`] for slug lookup and related-record queries.
//!
//! Records are supplied fully materialized by the surrounding
//! application (typically deserialized from JSON) and are read-only
//! for the duration of a render pass.

mod catalog;
mod record;

pub use catalog::{CatalogError, ContentCatalog};
pub use record::{ContentRecord, FaqEntry, Section};
