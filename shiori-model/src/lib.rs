//! Core data model definitions shared across Shiori crates.
#![allow(missing_docs)]

pub mod api;
pub mod category;
pub mod entry;
pub mod filters;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use api::ApiEnvelope;
pub use category::Category;
pub use entry::{Chapter, Entry};
pub use filters::{Facet, FilterCriteria, SENTINEL_ALL};
