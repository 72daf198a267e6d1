#[cfg(test)]
mod browse_state_tests {
    use std::sync::Arc;

    use shiori_core::{AddressBar, BrowseState, MemoryAddressBar, UrlSync};
    use shiori_model::{Facet, FilterCriteria};

    fn state_over(initial: &str) -> (BrowseState, MemoryAddressBar) {
        let bar = MemoryAddressBar::new(initial);
        let sync = UrlSync::new(Arc::new(bar.clone()));
        (BrowseState::from_address(sync), bar)
    }

    #[test]
    fn restores_committed_filters_from_a_shared_address() {
        let (state, _bar) = state_over("page=3&type=manga&genre=action");

        assert_eq!(state.page(), 3);
        assert_eq!(state.committed().kind.as_deref(), Some("manga"));
        assert_eq!(state.committed().category.as_deref(), Some("action"));
        // Draft starts in sync with committed.
        assert_eq!(state.draft(), state.committed());
    }

    #[test]
    fn draft_edits_do_not_touch_committed_state_or_the_address() {
        let (mut state, bar) = state_over("page=1");
        let writes_before = bar.writes().len();

        state.update_draft(Facet::Query, Some("vinland".to_string()));
        state.update_draft(Facet::Kind, Some("manga".to_string()));

        assert_eq!(state.committed(), &FilterCriteria::new());
        assert_eq!(state.draft().query.as_deref(), Some("vinland"));
        assert_eq!(bar.writes().len(), writes_before);
    }

    #[test]
    fn commit_applies_draft_resets_page_and_writes_through() {
        let (mut state, bar) = state_over("page=5&type=comic");

        state.update_draft(Facet::Status, Some("ongoing".to_string()));
        state.update_draft(Facet::Kind, Some("all".to_string()));
        state.commit();

        assert_eq!(state.page(), 1);
        assert_eq!(state.committed().status.as_deref(), Some("ongoing"));
        // The "all" sentinel commits as unconstrained.
        assert_eq!(state.committed().kind, None);

        let address = bar.query_string();
        assert!(address.contains("page=1"), "address={address}");
        assert!(address.contains("status=ongoing"), "address={address}");
        assert!(!address.contains("type="), "address={address}");
    }

    #[test]
    fn reset_is_idempotent_regardless_of_prior_commits() {
        let (mut state, bar) =
            state_over("page=7&type=manga&status=ongoing&search=xx");

        for _ in 0..2 {
            state.reset();
            assert_eq!(state.committed(), &FilterCriteria::new());
            assert_eq!(state.draft(), &FilterCriteria::new());
            assert_eq!(state.page(), 1);
            assert_eq!(bar.query_string(), "page=1");
        }
    }

    #[test]
    fn page_navigation_clamps_and_keeps_facets() {
        let (mut state, bar) = state_over("page=1&genre=action");

        state.set_page(9, 5);
        assert_eq!(state.page(), 5);

        state.set_page(0, 5);
        assert_eq!(state.page(), 1);

        let address = bar.query_string();
        assert!(address.contains("genre=action"), "address={address}");
    }
}
