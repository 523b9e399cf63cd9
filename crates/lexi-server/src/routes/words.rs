//! `/api/words` — list, bulk save, bulk delete.
//!
//! Thin adapters over the store: the reconciliation semantics live in
//! lexi-db, and the request/response bodies are the wire records from
//! lexi-core. Store failures surface as 500; the statistics DTOs are
//! always 200.

use axum::{Json, extract::State, http::StatusCode};

use lexi_core::records::{DeleteStatistics, SaveStatistics, WordRecord};

use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<WordRecord>>, StatusCode> {
    state.db.list_words().await.map(Json).map_err(|e| {
        tracing::error!("listing words failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn save(
    State(state): State<AppState>,
    Json(records): Json<Vec<WordRecord>>,
) -> Result<Json<SaveStatistics>, StatusCode> {
    state.db.save_words(&records).await.map(Json).map_err(|e| {
        tracing::error!("saving words failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn delete(
    State(state): State<AppState>,
    Json(records): Json<Vec<WordRecord>>,
) -> Result<Json<DeleteStatistics>, StatusCode> {
    state.db.delete_words(&records).await.map(Json).map_err(|e| {
        tracing::error!("deleting words failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
