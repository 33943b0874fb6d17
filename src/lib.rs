pub mod booking;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use crate::cache::WindowCache;
use crate::store::RecordStore;

pub use config::Config;

/// Shared state handed to every request handler. The record store is
/// injected here so tests run against the in-memory fake.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub windows: WindowCache,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, windows_cache_ttl: Duration) -> Self {
        AppState {
            store,
            windows: WindowCache::new(windows_cache_ttl),
        }
    }
}
