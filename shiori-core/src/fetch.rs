//! Catalog fetching with a loading flag and stale-response discard.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use shiori_model::{Entry, FilterCriteria};

use crate::api::CatalogApi;
use crate::pagination;

/// How a fetch resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response applied; the buffer was replaced with this many entries.
    Applied { count: usize },
    /// A later fetch was dispatched before this one resolved; the response
    /// was discarded.
    Superseded,
    /// The request failed. The previous buffer is untouched.
    Failed,
}

#[derive(Debug, Default)]
struct FetchState {
    buffer: Vec<Entry>,
    loading: bool,
}

/// Issues collection queries for committed filters and owns the result
/// buffer for one view.
///
/// Overlapping fetches are resolved last-request-wins: every dispatch bumps
/// a monotonic generation counter and captures its value, and a resolution
/// is applied only while its generation is still current. A superseded
/// resolution leaves buffer and loading flag alone; the superseding fetch
/// owns them.
#[derive(Debug, Clone)]
pub struct CatalogFetcher {
    api: Arc<dyn CatalogApi>,
    state: Arc<RwLock<FetchState>>,
    generation: Arc<AtomicU64>,
}

impl CatalogFetcher {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FetchState::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the full filtered set for `criteria` and replace the buffer
    /// wholesale on success.
    ///
    /// The loading flag is raised before dispatch and cleared on every
    /// terminal path of the current generation, success or failure. On
    /// failure the previous buffer is retained, the error is logged, and
    /// no retry is issued.
    pub async fn fetch(&self, criteria: &FilterCriteria) -> FetchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().loading = true;

        log::debug!(
            "dispatching collection fetch (generation {generation}): {criteria:?}"
        );
        let result = self.api.fetch_collection(criteria).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!(
                "discarding superseded collection response (generation {generation})"
            );
            return FetchOutcome::Superseded;
        }

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(entries) => {
                let count = entries.len();
                state.buffer = entries;
                log::debug!("collection fetch applied: {count} entries");
                FetchOutcome::Applied { count }
            }
            Err(err) => {
                log::warn!("collection fetch failed: {err}");
                FetchOutcome::Failed
            }
        }
    }

    /// Invalidate any in-flight fetch, e.g. on unmount or navigation.
    /// Their responses will be discarded when they resolve.
    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.write().loading = false;
    }

    /// While true, consumers render a loading state and must not trust the
    /// buffer contents.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Snapshot of the current buffer.
    pub fn buffer(&self) -> Vec<Entry> {
        self.state.read().buffer.clone()
    }

    /// Number of entries currently buffered.
    pub fn len(&self) -> usize {
        self.state.read().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().buffer.is_empty()
    }

    /// Pages the buffer spans at `page_size`, at least 1.
    pub fn total_pages(&self, page_size: usize) -> u32 {
        pagination::total_pages(self.state.read().buffer.len(), page_size)
    }

    /// The entries of `page` (1-based) at `page_size`.
    pub fn page(&self, page: u32, page_size: usize) -> Vec<Entry> {
        pagination::slice_page(&self.state.read().buffer, page, page_size)
            .to_vec()
    }
}
