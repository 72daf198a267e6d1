//! Catalog API trait and implementations.
//!
//! Provides abstraction over the read-only collection endpoints, so the
//! engine and its tests run against the same seam.

pub mod http;

use async_trait::async_trait;
use shiori_model::{Category, Chapter, Entry, FilterCriteria};

use crate::error::ApiResult;

pub use http::HttpCatalogApi;

/// Read-only collection endpoints the engine consumes.
///
/// Mutation endpoints (create/update/delete, uploads) are external
/// collaborators and deliberately absent.
#[async_trait]
pub trait CatalogApi: Send + Sync + std::fmt::Debug {
    /// Full filtered set for `criteria` — the backend does not paginate.
    async fn fetch_collection(
        &self,
        criteria: &FilterCriteria,
    ) -> ApiResult<Vec<Entry>>;

    /// Single entry detail, chapters included.
    async fn fetch_entry(&self, slug: &str) -> ApiResult<Entry>;

    /// All known categories.
    async fn fetch_categories(&self) -> ApiResult<Vec<Category>>;

    /// Chapter detail with ordered page assets.
    async fn fetch_chapter(&self, slug: &str, number: u32)
    -> ApiResult<Chapter>;
}
