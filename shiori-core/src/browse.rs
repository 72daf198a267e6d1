//! Draft/committed filter state for one browsing view.

use shiori_model::{Facet, FilterCriteria};

use crate::pagination::clamp_page;
use crate::routing::UrlSync;

/// Filter state owned by a single view.
///
/// Two parallel facet sets: **draft** is bound to the filter controls and
/// freely mutable; **committed** is reflected in the address bar and drives
/// the fetch. Decoupling them keeps keystrokes and dropdown changes from
/// re-querying the backend; only an explicit [`commit`](Self::commit) does.
#[derive(Debug, Clone)]
pub struct BrowseState {
    url: UrlSync,
    draft: FilterCriteria,
    committed: FilterCriteria,
    page: u32,
}

impl BrowseState {
    /// Restore state from the address bar; this is how a shared or reloaded
    /// address becomes filter state again.
    pub fn from_address(url: UrlSync) -> Self {
        let (committed, page) = url.read();
        Self {
            draft: committed.clone(),
            committed,
            page,
            url,
        }
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Mutate one draft facet. No URL write, no fetch.
    pub fn update_draft(&mut self, facet: Facet, value: Option<String>) {
        self.draft.set(facet, value);
    }

    /// Apply the draft: copy it to committed, reset to page 1, and write
    /// through the address bar. The URL change is what triggers the
    /// consumer's fetch.
    pub fn commit(&mut self) -> &FilterCriteria {
        self.committed = self.draft.clone().normalized();
        self.page = 1;
        self.url.write(&self.committed, self.page);
        &self.committed
    }

    /// Clear every facet in both sets, strip their keys from the address
    /// bar, and return to page 1. Idempotent regardless of prior commits.
    pub fn reset(&mut self) {
        self.draft = FilterCriteria::new();
        self.committed = FilterCriteria::new();
        self.page = 1;
        self.url.write(&self.committed, self.page);
    }

    /// Navigate to `page`, clamped into the available range. Writes only
    /// the page key; committed facets are not re-derived.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = clamp_page(page, total_pages);
        self.url.set_page(self.page);
    }
}
