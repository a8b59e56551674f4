use std::sync::Arc;

use crate::cache::QueryCache;
use crate::config::ServerConfig;
use crate::storage::MediaStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub pool: roadclips_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Public read cache, invalidated per mutation.
    pub cache: Arc<QueryCache>,
    /// Legacy upload storage.
    pub storage: Arc<MediaStorage>,
}

impl AppState {
    pub fn new(pool: roadclips_db::DbPool, config: ServerConfig) -> Self {
        let storage = MediaStorage::new(config.media_root.clone(), &config.public_base_url);
        Self {
            pool,
            config: Arc::new(config),
            cache: Arc::new(QueryCache::new()),
            storage: Arc::new(storage),
        }
    }
}
