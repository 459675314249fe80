//! Results Module Tests
//!
//! Validates the normalization layer: URL filtering, display defaults, order
//! preservation, and tolerance for malformed payload entries.

#[cfg(test)]
mod tests {
    use crate::results::normalizer::{normalize_results, normalize_values};
    use crate::results::types::RawRecord;
    use serde_json::json;

    fn record(title: Option<&str>, link: Option<&str>, snippet: Option<&str>) -> RawRecord {
        RawRecord {
            title: title.map(String::from),
            link: link.map(String::from),
            snippet: snippet.map(String::from),
        }
    }

    // ============================================================
    // FILTERING TESTS
    // ============================================================

    #[test]
    fn test_record_without_link_is_dropped() {
        let records = vec![
            record(Some("A"), Some("https://x.test"), None),
            record(Some("B"), None, None),
        ];
        let normalized = normalize_results(&records);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].title, "A");
    }

    #[test]
    fn test_blank_link_counts_as_missing() {
        let records = vec![record(Some("A"), Some("   "), None)];
        assert!(normalize_results(&records).is_empty());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = vec![
            record(Some("first"), Some("https://a.test"), None),
            record(None, None, None),
            record(Some("second"), Some("https://b.test"), None),
        ];
        let normalized = normalize_results(&records);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].title, "first");
        assert_eq!(normalized[1].title, "second");
    }

    #[test]
    fn test_no_deduplication() {
        let records = vec![
            record(Some("A"), Some("https://x.test"), None),
            record(Some("A"), Some("https://x.test"), None),
        ];
        assert_eq!(normalize_results(&records).len(), 2);
    }

    // ============================================================
    // DEFAULT TESTS
    // ============================================================

    #[test]
    fn test_missing_title_and_snippet_get_defaults() {
        let normalized = normalize_results(&[record(None, Some("https://x.test"), None)]);

        assert_eq!(normalized[0].title, "No title");
        assert_eq!(normalized[0].url, "https://x.test");
        assert_eq!(normalized[0].snippet, "No snippet available");
    }

    #[test]
    fn test_blank_title_gets_default() {
        let normalized = normalize_results(&[record(Some("  "), Some("https://x.test"), None)]);
        assert_eq!(normalized[0].title, "No title");
    }

    #[test]
    fn test_present_fields_pass_through() {
        let normalized = normalize_results(&[record(
            Some("Guide"),
            Some("https://docs.test/guide"),
            Some("A guide."),
        )]);

        assert_eq!(normalized[0].title, "Guide");
        assert_eq!(normalized[0].snippet, "A guide.");
    }

    // ============================================================
    // UNTYPED PAYLOAD TESTS
    // ============================================================

    #[test]
    fn test_values_with_url_alias() {
        let values = vec![json!({"title": "A", "url": "https://x.test"})];
        let normalized = normalize_values(&values);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].url, "https://x.test");
    }

    #[test]
    fn test_values_with_description_alias() {
        let values = vec![json!({"link": "https://x.test", "description": "desc"})];
        assert_eq!(normalize_values(&values)[0].snippet, "desc");
    }

    #[test]
    fn test_malformed_value_does_not_fail_batch() {
        let values = vec![
            json!({"title": "A", "link": "https://a.test"}),
            json!("just a string"),
            json!({"title": 42, "link": "https://b.test"}),
            json!({"title": "C", "link": "https://c.test"}),
        ];
        let normalized = normalize_values(&values);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].title, "A");
        assert_eq!(normalized[1].title, "C");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let values = vec![json!({
            "title": "A",
            "link": "https://a.test",
            "position": 1,
            "thumbnail": {"src": "x"}
        })];
        assert_eq!(normalize_values(&values).len(), 1);
    }
}
