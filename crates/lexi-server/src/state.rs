//! Shared application state.

use std::sync::Arc;

use lexi_db::LexiDb;

/// Shared state for all handlers: the one open database handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<LexiDb>,
}

impl AppState {
    pub fn new(db: Arc<LexiDb>) -> Self {
        Self { db }
    }
}
