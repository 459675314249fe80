use super::types::extract_records;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Transport boundary between the engine and the configured upstream.
///
/// Implementations receive the compiled query string plus the auxiliary
/// request parameters and return raw, untyped result records. Normalization
/// of those records is the `results` module's job, not the transport's.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn fetch(&self, query: &str, params: &HashMap<String, String>) -> Result<Vec<Value>>;
}

/// Reqwest-backed provider client for hosted search APIs.
///
/// Sends `q=<query>` plus every auxiliary parameter as query-string pairs
/// against a configurable base URL and extracts the result array from the
/// JSON body.
pub struct HttpSearchProvider {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSearchProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn fetch(&self, query: &str, params: &HashMap<String, String>) -> Result<Vec<Value>> {
        let mut pairs: Vec<(&str, &str)> = vec![("q", query)];
        for (key, value) in params {
            pairs.push((key.as_str(), value.as_str()));
        }
        if let Some(key) = &self.api_key {
            pairs.push(("api_key", key.as_str()));
        }

        tracing::debug!("Fetching upstream results for query {:?}", query);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&pairs)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Upstream search failed: {}",
                response.status()
            ));
        }

        let payload: Value = response.json().await?;
        let records = extract_records(&payload);
        tracing::debug!("Upstream returned {} raw records", records.len());

        Ok(records)
    }
}
