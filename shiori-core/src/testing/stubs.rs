//! In-memory [`CatalogApi`] and [`OverlayEffects`] doubles.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::StatusCode;
use shiori_model::{Category, Chapter, Entry, FilterCriteria};
use uuid::Uuid;

use crate::api::CatalogApi;
use crate::error::{ApiError, ApiResult};
use crate::shared::OverlayEffects;

/// Scripted behavior for one upcoming `fetch_collection` call.
#[derive(Debug)]
pub struct ScriptedResponse {
    pub delay: Duration,
    pub result: ApiResult<Vec<Entry>>,
}

impl ScriptedResponse {
    pub fn ok(entries: Vec<Entry>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(entries),
        }
    }

    pub fn ok_after(delay: Duration, entries: Vec<Entry>) -> Self {
        Self {
            delay,
            result: Ok(entries),
        }
    }

    pub fn server_error() -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "stubbed failure".to_string(),
            }),
        }
    }
}

#[derive(Debug, Default)]
struct InnerApiState {
    entries: Vec<Entry>,
    categories: Vec<Category>,
    scripted: VecDeque<ScriptedResponse>,
    recorded: Vec<FilterCriteria>,
}

/// [`CatalogApi`] double serving a fixed entry set.
///
/// `fetch_collection` filters the entry set the way the backend would, or
/// pops a scripted response when one is queued (for failure and
/// resolution-order scenarios). Every criteria it receives is recorded.
#[derive(Debug, Clone, Default)]
pub struct TestCatalogApi {
    inner: Arc<RwLock<InnerApiState>>,
}

impl TestCatalogApi {
    pub fn new(entries: Vec<Entry>) -> Self {
        let api = Self::default();
        api.inner.write().entries = entries;
        api
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.inner.write().categories = categories;
        self
    }

    /// Queue a scripted response for the next `fetch_collection` call.
    pub fn script(&self, response: ScriptedResponse) {
        self.inner.write().scripted.push_back(response);
    }

    /// Criteria received so far, in call order.
    pub fn recorded_criteria(&self) -> Vec<FilterCriteria> {
        self.inner.read().recorded.clone()
    }
}

fn matches(entry: &Entry, criteria: &FilterCriteria) -> bool {
    if let Some(kind) = &criteria.kind
        && entry.kind != *kind
    {
        return false;
    }
    if let Some(status) = &criteria.status
        && entry.status != *status
    {
        return false;
    }
    if let Some(category) = &criteria.category
        && !entry.categories.iter().any(|c| c == category)
    {
        return false;
    }
    if let Some(query) = &criteria.query
        && !entry
            .title
            .to_lowercase()
            .contains(&query.to_lowercase())
    {
        return false;
    }
    true
}

fn not_found(what: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::NOT_FOUND,
        body: format!("{what} not found"),
    }
}

#[async_trait]
impl CatalogApi for TestCatalogApi {
    async fn fetch_collection(
        &self,
        criteria: &FilterCriteria,
    ) -> ApiResult<Vec<Entry>> {
        let scripted = {
            let mut inner = self.inner.write();
            inner.recorded.push(criteria.clone());
            inner.scripted.pop_front()
        };

        if let Some(response) = scripted {
            if !response.delay.is_zero() {
                tokio::time::sleep(response.delay).await;
            }
            return response.result;
        }

        let inner = self.inner.read();
        Ok(inner
            .entries
            .iter()
            .filter(|entry| matches(entry, criteria))
            .cloned()
            .collect())
    }

    async fn fetch_entry(&self, slug: &str) -> ApiResult<Entry> {
        self.inner
            .read()
            .entries
            .iter()
            .find(|entry| entry.slug == slug)
            .cloned()
            .ok_or_else(|| not_found("entry"))
    }

    async fn fetch_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.inner.read().categories.clone())
    }

    async fn fetch_chapter(
        &self,
        slug: &str,
        number: u32,
    ) -> ApiResult<Chapter> {
        let inner = self.inner.read();
        inner
            .entries
            .iter()
            .find(|entry| entry.slug == slug)
            .and_then(|entry| {
                entry.chapters.iter().find(|c| c.number == number)
            })
            .cloned()
            .ok_or_else(|| not_found("chapter"))
    }
}

/// [`OverlayEffects`] double counting acquire/release calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingEffects {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl RecordingEffects {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// True while the effects are held (acquired but not released).
    pub fn held(&self) -> bool {
        self.acquired() > self.released()
    }
}

impl OverlayEffects for RecordingEffects {
    fn acquire(&self) {
        self.acquired.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build a minimal entry for tests.
pub fn sample_entry(
    slug: &str,
    kind: &str,
    status: &str,
    categories: &[&str],
) -> Entry {
    Entry {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        kind: kind.to_string(),
        status: status.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        cover_url: None,
        summary: None,
        chapters: Vec::new(),
    }
}
