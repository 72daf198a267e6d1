//! App-wide shared UI state: global spinner and the category overlay.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use shiori_model::{Entry, FilterCriteria};

use crate::api::CatalogApi;
use crate::fetch::FetchOutcome;

/// Side effects scoped to overlay visibility: an escape-key listener and
/// background scroll suppression. Acquired when the overlay opens,
/// released on every exit path (explicit close, backdrop, Escape, drop).
pub trait OverlayEffects: Send + Sync + std::fmt::Debug {
    fn acquire(&self);
    fn release(&self);
}

/// [`OverlayEffects`] that does nothing, for embedders without a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEffects;

impl OverlayEffects for NoopEffects {
    fn acquire(&self) {}
    fn release(&self) {}
}

/// Holds the acquired overlay effects; releasing is tied to this value's
/// lifetime, not to any caller remembering to undo them.
#[derive(Debug)]
struct OverlayGuard {
    effects: Arc<dyn OverlayEffects>,
}

impl OverlayGuard {
    fn acquire(effects: Arc<dyn OverlayEffects>) -> Self {
        effects.acquire();
        Self { effects }
    }
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        self.effects.release();
    }
}

/// Handle returned by [`SharedUiStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Default)]
struct SharedUiState {
    global_loading: bool,
    expanded_category: Option<String>,
    category_results: Vec<Entry>,
    category_loading: bool,
    guard: Option<OverlayGuard>,
}

/// Process-wide store consumed by otherwise-unrelated views.
///
/// Explicit and injectable rather than ambient global state: each embedder
/// (or test) instantiates its own store and hands out clones. Mutations
/// notify subscribers; the category overlay can be opened from any view and
/// closed from any other.
#[derive(Clone)]
pub struct SharedUiStore {
    api: Arc<dyn CatalogApi>,
    effects: Arc<dyn OverlayEffects>,
    inner: Arc<RwLock<SharedUiState>>,
    subscribers: Arc<RwLock<Vec<(u64, Subscriber)>>>,
    next_subscriber: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
}

impl std::fmt::Debug for SharedUiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedUiStore")
            .field("api", &self.api)
            .field("state", &*self.inner.read())
            .field("subscribers", &self.subscribers.read().len())
            .finish_non_exhaustive()
    }
}

impl SharedUiStore {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        effects: Arc<dyn OverlayEffects>,
    ) -> Self {
        Self {
            api,
            effects,
            inner: Arc::new(RwLock::new(SharedUiState::default())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscriber: Arc::new(AtomicU64::new(0)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    // === Observation ===

    /// Register a change listener. Called after every store mutation.
    pub fn subscribe(
        &self,
        listener: impl Fn() + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscriber.fetch_add(1, Ordering::SeqCst);
        self.subscribers.write().push((id, Arc::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.write().retain(|(sid, _)| *sid != id.0);
    }

    fn notify(&self) {
        // Invoke listeners outside the lock; they may re-enter the store.
        let listeners: Vec<Subscriber> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    // === Global spinner ===

    pub fn global_loading(&self) -> bool {
        self.inner.read().global_loading
    }

    pub fn set_global_loading(&self, loading: bool) {
        self.inner.write().global_loading = loading;
        self.notify();
    }

    // === Category overlay ===

    pub fn expanded_category(&self) -> Option<String> {
        self.inner.read().expanded_category.clone()
    }

    pub fn category_results(&self) -> Vec<Entry> {
        self.inner.read().category_results.clone()
    }

    pub fn category_loading(&self) -> bool {
        self.inner.read().category_loading
    }

    /// Open the overlay for `category` and fetch its entries.
    ///
    /// Acquires the overlay side effects if not already held. The fetch
    /// follows the same stale-response discipline as
    /// [`crate::CatalogFetcher`]: closing or re-opening while in flight
    /// discards the response.
    pub async fn open_category(&self, category: &str) -> FetchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut inner = self.inner.write();
            inner.expanded_category = Some(category.to_string());
            inner.category_results = Vec::new();
            inner.category_loading = true;
            if inner.guard.is_none() {
                inner.guard =
                    Some(OverlayGuard::acquire(Arc::clone(&self.effects)));
            }
        }
        self.notify();

        log::debug!("category overlay opened: {category}");
        let criteria = FilterCriteria::new().with_category(category);
        let result = self.api.fetch_collection(&criteria).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!(
                "discarding superseded category response: {category}"
            );
            return FetchOutcome::Superseded;
        }

        let outcome = {
            let mut inner = self.inner.write();
            inner.category_loading = false;
            match result {
                Ok(entries) => {
                    let count = entries.len();
                    inner.category_results = entries;
                    FetchOutcome::Applied { count }
                }
                Err(err) => {
                    log::warn!("category fetch failed for {category}: {err}");
                    FetchOutcome::Failed
                }
            }
        };
        self.notify();
        outcome
    }

    /// Close the overlay: clear the category name, empty its buffer, and
    /// release the overlay side effects. No-op when nothing is open.
    pub fn close_category(&self) {
        let guard = {
            let mut inner = self.inner.write();
            if inner.expanded_category.is_none() {
                return;
            }
            self.generation.fetch_add(1, Ordering::SeqCst);
            inner.expanded_category = None;
            inner.category_results = Vec::new();
            inner.category_loading = false;
            inner.guard.take()
        };
        // Release effects outside the state lock.
        drop(guard);
        log::debug!("category overlay closed");
        self.notify();
    }

    /// Escape-key signal from the shell's key listener. Returns true when
    /// it closed the overlay.
    pub fn on_escape(&self) -> bool {
        if self.inner.read().expanded_category.is_some() {
            self.close_category();
            true
        } else {
            false
        }
    }
}
