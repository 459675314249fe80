//! Search Module Tests
//!
//! Validates the orchestration pipeline end-to-end against a stubbed provider:
//! compilation, parameter derivation, normalization, and history recording,
//! with no network involved.

#[cfg(test)]
mod tests {
    use crate::history::memory::HistoryStore;
    use crate::provider::client::SearchProvider;
    use crate::query::assembler::{compile_advanced_query, compile_basic_query};
    use crate::query::types::{DateRange, SearchConstraints};
    use crate::search::engine::run_search;
    use crate::search::types::AdvancedSearchRequest;
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records what it was asked for and replies with canned records.
    struct StubProvider {
        records: Vec<Value>,
        seen: Mutex<Vec<(String, HashMap<String, String>)>>,
    }

    impl StubProvider {
        fn new(records: Vec<Value>) -> Self {
            Self {
                records,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> (String, HashMap<String, String>) {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn fetch(&self, query: &str, params: &HashMap<String, String>) -> Result<Vec<Value>> {
            self.seen
                .lock()
                .unwrap()
                .push((query.to_string(), params.clone()));
            Ok(self.records.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        async fn fetch(&self, _query: &str, _params: &HashMap<String, String>) -> Result<Vec<Value>> {
            Err(anyhow::anyhow!("upstream down"))
        }
    }

    // ============================================================
    // ENGINE PIPELINE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_pipeline_compiles_fetches_and_normalizes() {
        let provider = StubProvider::new(vec![
            json!({"title": "Guide", "link": "https://docs.example.com/guide", "snippet": "s"}),
            json!({"title": "No link here"}),
        ]);
        let history = HistoryStore::new();

        let compiled = compile_basic_query("docs.example.com", "guide").unwrap();
        let outcome = run_search(
            compiled,
            DateRange::Any,
            None,
            None,
            &provider,
            &history,
            None,
        )
        .await
        .unwrap();

        assert_eq!(outcome.compiled.query, "site:docs.example.com guide");
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].url, "https://docs.example.com/guide");
    }

    #[tokio::test]
    async fn test_pipeline_sends_compiled_query_and_params_upstream() {
        let provider = StubProvider::new(vec![]);
        let history = HistoryStore::new();

        let compiled = compile_basic_query("example.com", "rust").unwrap();
        run_search(
            compiled,
            DateRange::Week,
            Some("de"),
            Some("de"),
            &provider,
            &history,
            None,
        )
        .await
        .unwrap();

        let (query, params) = provider.last_request();
        assert_eq!(query, "site:example.com rust");
        assert_eq!(params.get("time_range").map(String::as_str), Some("w"));
        assert_eq!(params.get("gl").map(String::as_str), Some("de"));
        assert_eq!(params.get("hl").map(String::as_str), Some("de"));
    }

    #[tokio::test]
    async fn test_pipeline_omits_time_range_for_any() {
        let provider = StubProvider::new(vec![]);
        let history = HistoryStore::new();

        let compiled = compile_basic_query("example.com", "rust").unwrap();
        run_search(
            compiled,
            DateRange::Any,
            None,
            None,
            &provider,
            &history,
            None,
        )
        .await
        .unwrap();

        let (_, params) = provider.last_request();
        assert!(!params.contains_key("time_range"));
        assert_eq!(params.get("gl").map(String::as_str), Some("us"));
        assert_eq!(params.get("hl").map(String::as_str), Some("en"));
    }

    #[tokio::test]
    async fn test_pipeline_records_history_for_user() {
        let provider = StubProvider::new(vec![json!({"link": "https://x.test"})]);
        let history = HistoryStore::new();

        let compiled = compile_basic_query("example.com", "rust").unwrap();
        run_search(
            compiled,
            DateRange::Any,
            None,
            None,
            &provider,
            &history,
            Some("alice"),
        )
        .await
        .unwrap();

        let entries = history.list("alice");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "site:example.com rust");
        assert_eq!(entries[0].result_count, 1);
    }

    #[tokio::test]
    async fn test_pipeline_skips_history_without_user() {
        let provider = StubProvider::new(vec![]);
        let history = HistoryStore::new();

        let compiled = compile_basic_query("example.com", "rust").unwrap();
        run_search(
            compiled,
            DateRange::Any,
            None,
            None,
            &provider,
            &history,
            None,
        )
        .await
        .unwrap();

        assert!(history.list("").is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_and_records_nothing() {
        let history = HistoryStore::new();

        let compiled = compile_basic_query("example.com", "rust").unwrap();
        let outcome = run_search(
            compiled,
            DateRange::Any,
            None,
            None,
            &FailingProvider,
            &history,
            Some("alice"),
        )
        .await;

        assert!(outcome.is_err());
        assert!(history.list("alice").is_empty());
    }

    // ============================================================
    // DTO TESTS
    // ============================================================

    #[test]
    fn test_advanced_request_lowers_to_constraints() {
        let request: AdvancedSearchRequest = serde_json::from_value(json!({
            "domain": "docs.example.com",
            "all_terms": "migration guide",
            "exclude_terms": "beta",
            "file_type": "pdf",
            "date_range": "month"
        }))
        .unwrap();

        let constraints: SearchConstraints = request.into_constraints();
        assert_eq!(constraints.domain, "docs.example.com");
        assert_eq!(constraints.date_range, DateRange::Month);

        let compiled = compile_advanced_query(&constraints).unwrap();
        assert_eq!(
            compiled.query,
            "site:docs.example.com +migration +guide -beta filetype:pdf"
        );
        assert_eq!(compiled.operators.len(), 4);
    }

    #[test]
    fn test_advanced_request_unknown_date_range_is_any() {
        let request: AdvancedSearchRequest = serde_json::from_value(json!({
            "domain": "example.com",
            "date_range": "fortnight"
        }))
        .unwrap();

        assert_eq!(request.into_constraints().date_range, DateRange::Any);
    }
}
