//! Address-bar synchronization: filter state ⇄ query string.

pub mod address;
pub mod query;

pub use address::{AddressBar, MemoryAddressBar};
pub use query::UrlSync;
