#[cfg(test)]
mod url_sync_tests {
    use std::sync::Arc;

    use shiori_core::routing::query::{encode_query, parse_query};
    use shiori_core::{AddressBar, MemoryAddressBar, UrlSync};
    use shiori_model::FilterCriteria;

    fn sync_over(initial: &str) -> (UrlSync, MemoryAddressBar) {
        let bar = MemoryAddressBar::new(initial);
        (UrlSync::new(Arc::new(bar.clone())), bar)
    }

    #[test]
    fn write_then_read_round_trips_modulo_sentinel() {
        let (sync, _bar) = sync_over("");
        let criteria = FilterCriteria::new()
            .with_kind("manga")
            .with_status("ongoing")
            .with_query("berserk");

        sync.write(&criteria, 3);
        let (read, page) = sync.read();

        assert_eq!(read, criteria);
        assert_eq!(page, 3);
    }

    #[test]
    fn sentinel_facets_never_reach_the_address() {
        let (sync, bar) = sync_over("");
        let criteria =
            FilterCriteria::new().with_category("all").with_kind("manga");

        sync.write(&criteria, 1);
        let address = bar.query_string();

        assert!(address.contains("type=manga"), "address={address}");
        assert!(!address.contains("genre"), "address={address}");
        // Request parameters follow the same omission rule.
        assert_eq!(
            criteria.request_params(),
            vec![("kind", "manga".to_string())]
        );
    }

    #[test]
    fn absent_page_is_canonicalized_on_read() {
        let (sync, bar) = sync_over("genre=action");
        let (criteria, page) = sync.read();

        assert_eq!(page, 1);
        assert_eq!(criteria.category.as_deref(), Some("action"));
        let address = bar.query_string();
        assert!(address.contains("page=1"), "address={address}");
        assert!(address.contains("genre=action"), "address={address}");
    }

    #[test]
    fn malformed_page_is_corrected_not_crashed() {
        let (sync, bar) = sync_over("page=banana&type=manga");
        let (criteria, page) = sync.read();

        assert_eq!(page, 1);
        assert_eq!(criteria.kind.as_deref(), Some("manga"));
        assert!(bar.query_string().contains("page=1"));
    }

    #[test]
    fn clearing_a_facet_removes_its_key() {
        let (sync, bar) = sync_over("");
        sync.write(&FilterCriteria::new().with_category("action"), 1);
        assert!(bar.query_string().contains("genre=action"));

        sync.write(&FilterCriteria::new(), 1);
        assert_eq!(bar.query_string(), "page=1");
    }

    #[test]
    fn page_writes_preserve_committed_facets() {
        let (sync, bar) = sync_over("");
        sync.write(
            &FilterCriteria::new().with_kind("manga").with_query("one"),
            1,
        );

        sync.set_page(4);
        let (criteria, page) = sync.read();

        assert_eq!(page, 4);
        assert_eq!(criteria.kind.as_deref(), Some("manga"));
        assert_eq!(criteria.query.as_deref(), Some("one"));
        assert!(bar.query_string().contains("page=4"));
    }

    #[test]
    fn codec_round_trip_law() {
        let samples = [
            FilterCriteria::new(),
            FilterCriteria::new().with_kind("comic"),
            FilterCriteria::new()
                .with_kind("manga")
                .with_status("completed")
                .with_category("sci fi & fantasy")
                .with_query("20th century boys"),
        ];
        for criteria in samples {
            for page in [1, 2, 99] {
                let parsed = parse_query(&encode_query(&criteria, page));
                assert_eq!(parsed.criteria, criteria);
                assert_eq!(parsed.page, page);
                assert!(parsed.page_canonical);
            }
        }
    }
}
