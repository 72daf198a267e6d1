//! Shiori catalog browsing engine.
//!
//! The filter/URL synchronization and pagination machinery shared by the
//! listing, genre, and search views of a media library client. Headless:
//! the engine shapes backend requests, holds fully materialized result
//! buffers, and computes the page-index presentation. Rendering and
//! routing stay with the embedding shell.

pub mod api;
pub mod browse;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod pagination;
pub mod routing;
pub mod shared;
pub mod testing;

pub use api::{CatalogApi, HttpCatalogApi};
pub use browse::BrowseState;
pub use error::{ApiError, ApiResult};
pub use fetch::{CatalogFetcher, FetchOutcome};
pub use pagination::{PageToken, slice_page, total_pages, window};
pub use routing::{AddressBar, MemoryAddressBar, UrlSync};
pub use shared::{NoopEffects, OverlayEffects, SharedUiStore, SubscriptionId};
