use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::ProductStore;

/// Shared application state, constructed once at startup and cloned into
/// every handler via `axum::extract::State`.
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            store: ProductStore::new(pool),
            config: Arc::new(config),
        }
    }
}
