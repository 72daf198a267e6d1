//! Filter criteria shared by the listing, genre, and search views.

use serde::{Deserialize, Serialize};

/// UI-level sentinel meaning "no constraint on this facet".
///
/// Filter controls surface it as a selectable option, but it is never
/// persisted to the address bar or forwarded to the backend; both
/// represent an unconstrained facet by omission.
pub const SENTINEL_ALL: &str = "all";

/// One independent filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    /// Entry kind (e.g. "manga", "comic").
    Kind,
    /// Publication status (e.g. "ongoing", "completed").
    Status,
    /// Category / genre name.
    Category,
    /// Free-text search.
    Query,
}

impl Facet {
    /// Every facet, in the order filter controls present them.
    pub fn all() -> &'static [Facet] {
        &[Facet::Kind, Facet::Status, Facet::Category, Facet::Query]
    }

    /// Parameter name the backend expects for this facet.
    pub fn request_key(&self) -> &'static str {
        match self {
            Facet::Kind => "kind",
            Facet::Status => "status",
            Facet::Category => "category",
            Facet::Query => "query",
        }
    }
}

/// Committed or draft facet values for one view.
///
/// `None` means the facet is unconstrained. The `"all"` sentinel and the
/// empty string normalize to `None` at every boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
}

impl FilterCriteria {
    /// Create unconstrained criteria.
    pub fn new() -> Self {
        Self::default()
    }

    // === Fluent setters ===

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.set(Facet::Kind, Some(kind.into()));
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.set(Facet::Status, Some(status.into()));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set(Facet::Category, Some(category.into()));
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set(Facet::Query, Some(query.into()));
        self
    }

    /// Set one facet, normalizing the sentinel and empty values to absent.
    pub fn set(&mut self, facet: Facet, value: Option<String>) {
        let value = value.and_then(normalize);
        match facet {
            Facet::Kind => self.kind = value,
            Facet::Status => self.status = value,
            Facet::Category => self.category = value,
            Facet::Query => self.query = value,
        }
    }

    /// Current value of one facet, `None` when unconstrained.
    pub fn get(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Kind => self.kind.as_deref(),
            Facet::Status => self.status.as_deref(),
            Facet::Category => self.category.as_deref(),
            Facet::Query => self.query.as_deref(),
        }
    }

    /// True when every facet is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        Facet::all().iter().all(|f| self.get(*f).is_none())
    }

    /// Re-apply sentinel normalization to every facet.
    ///
    /// Values arriving from outside (address bar, persisted state) may
    /// still carry the sentinel or empty strings.
    pub fn normalized(mut self) -> Self {
        for facet in Facet::all() {
            let value = self.get(*facet).map(str::to_owned);
            self.set(*facet, value);
        }
        self
    }

    /// Request parameters for the backend query, constrained facets only.
    pub fn request_params(&self) -> Vec<(&'static str, String)> {
        Facet::all()
            .iter()
            .filter_map(|facet| {
                self.get(*facet)
                    .map(|value| (facet.request_key(), value.to_owned()))
            })
            .collect()
    }
}

fn normalize(value: String) -> Option<String> {
    if value.is_empty() || value == SENTINEL_ALL {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_normalize_to_absent() {
        let mut criteria = FilterCriteria::new();
        criteria.set(Facet::Kind, Some("all".to_string()));
        criteria.set(Facet::Status, Some(String::new()));
        criteria.set(Facet::Category, Some("romance".to_string()));

        assert_eq!(criteria.kind, None);
        assert_eq!(criteria.status, None);
        assert_eq!(criteria.category.as_deref(), Some("romance"));
    }

    #[test]
    fn request_params_skip_unconstrained_facets() {
        let criteria = FilterCriteria::new()
            .with_category("all")
            .with_kind("manga");

        let params = criteria.request_params();
        assert_eq!(params, vec![("kind", "manga".to_string())]);
    }

    #[test]
    fn normalized_scrubs_values_set_directly() {
        let criteria = FilterCriteria {
            kind: Some("all".to_string()),
            status: Some("ongoing".to_string()),
            category: Some(String::new()),
            query: None,
        }
        .normalized();

        assert_eq!(criteria.kind, None);
        assert_eq!(criteria.status.as_deref(), Some("ongoing"));
        assert_eq!(criteria.category, None);
        assert!(!criteria.is_unconstrained());
    }
}
