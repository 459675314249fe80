use super::memory::HistoryStore;
use super::types::{ClearHistoryResponse, HistoryResponse};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_history(
    Path(user): Path<String>,
    Extension(store): Extension<Arc<HistoryStore>>,
) -> (StatusCode, Json<HistoryResponse>) {
    let entries = store.list(&user);
    (
        StatusCode::OK,
        Json(HistoryResponse {
            user,
            count: entries.len(),
            entries,
        }),
    )
}

pub async fn handle_clear_history(
    Path(user): Path<String>,
    Extension(store): Extension<Arc<HistoryStore>>,
) -> (StatusCode, Json<ClearHistoryResponse>) {
    let removed = store.clear(&user);
    tracing::info!("Cleared {} history entries for user {}", removed, user);
    (StatusCode::OK, Json(ClearHistoryResponse { user, removed }))
}
