//! Engine/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in shiori-core or other presentation layers.

pub use super::api::ApiEnvelope;
pub use super::category::Category;
pub use super::entry::{Chapter, Entry};
pub use super::filters::{Facet, FilterCriteria, SENTINEL_ALL};
