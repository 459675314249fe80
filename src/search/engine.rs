use crate::history::memory::HistoryStore;
use crate::provider::client::SearchProvider;
use crate::query::params::{map_date_range, map_locale};
use crate::query::types::{CompiledQuery, DateRange};
use crate::results::normalizer::normalize_values;
use crate::results::types::NormalizedResult;
use anyhow::Result;

/// The outcome of one executed search: what was compiled and what came back.
#[derive(Debug)]
pub struct SearchOutcome {
    pub compiled: CompiledQuery,
    pub results: Vec<NormalizedResult>,
}

/// Runs an already-compiled query through the fetch / normalize / record pipeline.
///
/// Auxiliary parameters are derived here from the date range and locale, so
/// the transport sees one flat parameter map. A history entry is recorded
/// only when a user id is supplied and the upstream fetch succeeded.
pub async fn run_search(
    compiled: CompiledQuery,
    range: DateRange,
    language: Option<&str>,
    region: Option<&str>,
    provider: &dyn SearchProvider,
    history: &HistoryStore,
    user: Option<&str>,
) -> Result<SearchOutcome> {
    let mut params = map_locale(language, region);
    params.extend(map_date_range(range));

    let raw_records = provider.fetch(&compiled.query, &params).await?;
    let results = normalize_values(&raw_records);

    tracing::info!(
        "Search {:?} returned {} results ({} raw records)",
        compiled.query,
        results.len(),
        raw_records.len()
    );

    if let Some(user) = user {
        history.record(user, &compiled.query, &compiled.description, results.len());
    }

    Ok(SearchOutcome { compiled, results })
}
