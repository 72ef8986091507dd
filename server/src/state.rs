use std::sync::Arc;

use crate::db::CampusStore;

/// Shared by every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CampusStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CampusStore>) -> Self {
        Self { store }
    }
}
