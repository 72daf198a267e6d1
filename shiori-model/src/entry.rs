//! Catalog entries and their nested chapters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry (one title in the collection).
///
/// List endpoints return entries without chapters; the detail endpoint
/// includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    /// URL-safe identifier used by the detail endpoints.
    pub slug: String,
    pub title: String,
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A sub-entry of a catalog entry, with its ordered page assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    #[serde(default)]
    pub title: Option<String>,
    /// Page asset URLs in reading order. Empty in entry listings; the
    /// chapter detail endpoint populates it.
    #[serde(default)]
    pub page_urls: Vec<String>,
}
