//! Abstraction over the address bar's query-string component.

use std::sync::Arc;

use parking_lot::RwLock;

/// The query-string component of the current address.
///
/// The embedding shell backs this with its real location/history handle;
/// tests and headless embedders use [`MemoryAddressBar`]. Implementations
/// store the raw string without a leading `?`.
pub trait AddressBar: Send + Sync + std::fmt::Debug {
    /// Current query string.
    fn query_string(&self) -> String;

    /// Replace the query string without reloading the view.
    fn set_query_string(&self, query: String);
}

/// In-memory [`AddressBar`] so each test case gets an independent address.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBar {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    current: String,
    writes: Vec<String>,
}

impl MemoryAddressBar {
    pub fn new(initial: impl Into<String>) -> Self {
        let bar = Self::default();
        bar.inner.write().current = initial.into();
        bar
    }

    /// Every query string written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.inner.read().writes.clone()
    }
}

impl AddressBar for MemoryAddressBar {
    fn query_string(&self) -> String {
        self.inner.read().current.clone()
    }

    fn set_query_string(&self, query: String) {
        let mut inner = self.inner.write();
        inner.current = query.clone();
        inner.writes.push(query);
    }
}
