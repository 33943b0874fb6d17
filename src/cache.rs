use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::error::StoreError;
use crate::models::availability::AvailabilityWindow;
use crate::store::RecordStore;

const WINDOWS_KEY: &str = "windows";

/// Read-through cache in front of the `AvailableDays` collection. The
/// window set changes rarely, so the store is asked at most once per TTL
/// no matter how many booking views are open. A failed fetch is not
/// cached; the next request tries again.
pub struct WindowCache {
    inner: Cache<&'static str, Arc<Vec<AvailabilityWindow>>>,
}

impl WindowCache {
    pub fn new(ttl: Duration) -> Self {
        WindowCache {
            inner: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    pub async fn get_or_fetch(
        &self,
        store: &dyn RecordStore,
    ) -> Result<Arc<Vec<AvailabilityWindow>>, StoreError> {
        self.inner
            .try_get_with(WINDOWS_KEY, async {
                store.select_windows().await.map(Arc::new)
            })
            .await
            .map_err(|e: Arc<StoreError>| (*e).clone())
    }
}
