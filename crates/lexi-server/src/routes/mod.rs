//! Route wiring for the REST surface.

mod dictionary;
mod words;

use axum::{
    Router,
    http::StatusCode,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/words",
            get(words::list)
                .post(words::save)
                .delete(words::delete),
        )
        .route(
            "/api/words/:id/dictionary/:source",
            get(dictionary::get).post(dictionary::save),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
