use super::engine::{run_search, SearchOutcome};
use super::types::{AdvancedSearchRequest, BasicSearchParams, SearchResponse};
use crate::history::memory::HistoryStore;
use crate::provider::client::SearchProvider;
use crate::query::assembler::{compile_advanced_query, compile_basic_query};
use crate::query::types::{DateRange, QueryError, SearchConstraints};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_basic_search(
    Query(params): Query<BasicSearchParams>,
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    Extension(history): Extension<Arc<HistoryStore>>,
) -> (StatusCode, Json<SearchResponse>) {
    let compiled = match compile_basic_query(&params.domain, &params.q) {
        Ok(compiled) => compiled,
        Err(QueryError::InvalidDomain { domain }) => {
            tracing::warn!("Rejected basic search for invalid domain {:?}", domain);
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchResponse::error("invalid_domain")),
            );
        }
    };

    let outcome = run_search(
        compiled,
        DateRange::parse(params.date_range.as_deref()),
        params.language.as_deref(),
        params.region.as_deref(),
        provider.as_ref(),
        &history,
        params.user.as_deref(),
    )
    .await;

    respond(outcome)
}

pub async fn handle_advanced_search(
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    Extension(history): Extension<Arc<HistoryStore>>,
    Json(request): Json<AdvancedSearchRequest>,
) -> (StatusCode, Json<SearchResponse>) {
    let user = request.user.clone();
    let constraints: SearchConstraints = request.into_constraints();

    let compiled = match compile_advanced_query(&constraints) {
        Ok(compiled) => compiled,
        Err(QueryError::InvalidDomain { domain }) => {
            tracing::warn!("Rejected advanced search for invalid domain {:?}", domain);
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchResponse::error("invalid_domain")),
            );
        }
    };

    let outcome = run_search(
        compiled,
        constraints.date_range,
        constraints.language.as_deref(),
        constraints.region.as_deref(),
        provider.as_ref(),
        &history,
        user.as_deref(),
    )
    .await;

    respond(outcome)
}

fn respond(outcome: anyhow::Result<SearchOutcome>) -> (StatusCode, Json<SearchResponse>) {
    match outcome {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SearchResponse {
                status: "ok".to_string(),
                query: outcome.compiled.query,
                operators: outcome.compiled.operators,
                description: outcome.compiled.description,
                count: outcome.results.len(),
                results: outcome.results,
            }),
        ),
        Err(err) => {
            tracing::error!("Upstream search failed: {:?}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(SearchResponse::error("upstream_failed")),
            )
        }
    }
}
