//! Query-string codec and the bidirectional URL synchronization adapter.

use std::sync::Arc;

use shiori_model::{Facet, FilterCriteria};
use url::form_urlencoded;

use super::address::AddressBar;

/// Recognized address-bar keys. `page` is always present once canonicalized;
/// the facet keys appear only while constrained.
const PAGE_KEY: &str = "page";

fn address_key(facet: Facet) -> &'static str {
    match facet {
        Facet::Kind => "type",
        Facet::Status => "status",
        Facet::Category => "genre",
        Facet::Query => "search",
    }
}

/// Outcome of parsing an address-bar query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub criteria: FilterCriteria,
    pub page: u32,
    /// False when `page` was absent or malformed and had to be corrected.
    pub page_canonical: bool,
}

/// Parse a raw query string into criteria and a page index.
///
/// Unrecognized keys are ignored. Sentinel and empty facet values read as
/// unconstrained; a missing or non-numeric `page` reads as 1.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let mut criteria = FilterCriteria::new();
    let mut page = None;

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key == PAGE_KEY {
            page = value.parse::<u32>().ok().filter(|p| *p >= 1);
            continue;
        }
        for facet in Facet::all() {
            if key == address_key(*facet) {
                criteria.set(*facet, Some(value.clone().into_owned()));
            }
        }
    }

    ParsedQuery {
        criteria,
        page: page.unwrap_or(1),
        page_canonical: page.is_some(),
    }
}

/// Serialize criteria and page into a query string.
///
/// Unconstrained facets are omitted entirely; key ordering is not part of
/// the contract.
pub fn encode_query(criteria: &FilterCriteria, page: u32) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair(PAGE_KEY, &page.max(1).to_string());
    for facet in Facet::all() {
        if let Some(value) = criteria.get(*facet) {
            serializer.append_pair(address_key(*facet), value);
        }
    }
    serializer.finish()
}

/// Bidirectional mapping between filter state and the address bar.
#[derive(Debug, Clone)]
pub struct UrlSync {
    address: Arc<dyn AddressBar>,
}

impl UrlSync {
    pub fn new(address: Arc<dyn AddressBar>) -> Self {
        Self { address }
    }

    /// Read committed criteria and page from the address bar.
    ///
    /// If `page` was absent or malformed, the corrected address is written
    /// back so the address stays canonical.
    pub fn read(&self) -> (FilterCriteria, u32) {
        let parsed = parse_query(&self.address.query_string());
        if !parsed.page_canonical {
            log::debug!("canonicalizing address: page was absent or malformed");
            self.address
                .set_query_string(encode_query(&parsed.criteria, parsed.page));
        }
        (parsed.criteria, parsed.page)
    }

    /// Write criteria and page through to the address bar.
    ///
    /// Facets without a value are removed from the query string, never left
    /// as stale values.
    pub fn write(&self, criteria: &FilterCriteria, page: u32) {
        self.address
            .set_query_string(encode_query(criteria, page));
    }

    /// Update only the page key, preserving whatever facets are committed.
    ///
    /// Pagination alone must not require re-deriving the other facets.
    pub fn set_page(&self, page: u32) {
        let parsed = parse_query(&self.address.query_string());
        self.address
            .set_query_string(encode_query(&parsed.criteria, page));
    }
}
