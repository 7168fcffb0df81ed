//! Edition record and persisted document types

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier assigned by the store
pub type EditionId = u64;

/// A single catalog record: one issue of the publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub id: EditionId,
    pub title: String,
    pub issue_number: Number,
    pub cover_image_url: String,
    pub publish_date: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Edition {
    /// Issue number as a float, for numeric comparison
    pub fn issue_number_f64(&self) -> f64 {
        self.issue_number.as_f64().unwrap_or(0.0)
    }

    /// Returns true if any tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// The unit of persistence: the whole collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditionDocument {
    pub editions: Vec<Edition>,
}

impl EditionDocument {
    pub fn new(editions: Vec<Edition>) -> Self {
        Self { editions }
    }
}

/// Next id for a collection: one past the highest id, or 1 when empty.
///
/// `None` once the highest id is `EditionId::MAX`.
pub fn next_id(editions: &[Edition]) -> Option<EditionId> {
    match editions.iter().map(|e| e.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
