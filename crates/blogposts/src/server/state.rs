use std::sync::Arc;
use std::time::Duration;

use blogposts_core::CollectionStore;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ApiError;

/// Shared application state
///
/// Queries and lookups share the read side of the lock; inserts, updates and
/// deletes hold the write side, so no reader ever sees a half-applied mutation.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<RwLock<CollectionStore>>,
    timeout: Duration,
}

impl AppState {
    pub fn new(store: CollectionStore, timeout: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            timeout,
        }
    }

    /// Wait up to the request timeout for shared access to the store
    pub async fn read(&self) -> Result<RwLockReadGuard<'_, CollectionStore>, ApiError> {
        tokio::time::timeout(self.timeout, self.store.read())
            .await
            .map_err(|_| ApiError::Timeout(self.timeout))
    }

    /// Wait up to the request timeout for exclusive access to the store
    pub async fn write(&self) -> Result<RwLockWriteGuard<'_, CollectionStore>, ApiError> {
        tokio::time::timeout(self.timeout, self.store.write())
            .await
            .map_err(|_| ApiError::Timeout(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogposts_core::PostDraft;

    fn state() -> AppState {
        AppState::new(CollectionStore::new(), Duration::from_millis(20))
    }

    #[tokio::test]
    async fn test_readers_share_the_store() {
        let state = state();
        let first = state.read().await.unwrap();
        let second = state.read().await.unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[tokio::test]
    async fn test_read_times_out_while_writer_holds_lock() {
        let state = state();
        let _writer = state.store.write().await;

        let result = state.read().await;
        assert!(matches!(result, Err(ApiError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_write_times_out_while_reader_holds_lock() {
        let state = state();
        let _reader = state.store.read().await;

        let result = state.write().await;
        assert!(matches!(result, Err(ApiError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let state = state();
        let other = state.clone();

        let id = state
            .write()
            .await
            .unwrap()
            .insert(PostDraft::new("t", "c", "a"))
            .unwrap();

        assert!(other.read().await.unwrap().get(id).is_ok());
    }
}
