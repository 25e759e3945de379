//! Mock storage effect handler for testing
//!
//! Uses `Arc<RwLock<>>` for shared storage state so clones observe the same
//! data.

use async_lock::RwLock;
use async_trait::async_trait;
use charter_core::effects::{StorageEffects, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory storage handler for testing
#[derive(Debug, Clone, Default)]
pub struct MemoryStorageHandler {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorageHandler {
    /// Create a new memory storage handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `store`/`remove` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Check if storage is empty
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }

    /// Snapshot of all stored keys, sorted
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StorageEffects for MemoryStorageHandler {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.check_writable(key)?;
        let mut data = self.data.write().await;
        data.insert(key.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.check_writable(key)?;
        let mut data = self.data.write().await;
        Ok(data.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let data = self.data.read().await;
        Ok(data.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = MemoryStorageHandler::new();
        let other = storage.clone();

        storage.store("k", vec![1]).await.unwrap();
        assert_eq!(other.retrieve("k").await.unwrap(), Some(vec![1]));
        assert!(other.remove("k").await.unwrap());
        assert!(!storage.exists("k").await.unwrap());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_injected_write_failure() {
        let storage = MemoryStorageHandler::new();
        storage.set_fail_writes(true);

        assert!(matches!(
            storage.store("k", vec![1]).await,
            Err(StorageError::WriteFailed { .. })
        ));
        assert!(storage.is_empty().await);

        storage.set_fail_writes(false);
        storage.store("k", vec![1]).await.unwrap();
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_len_waits_for_writer() {
        let storage = MemoryStorageHandler::new();
        storage.store("k", vec![1]).await.unwrap();

        let writer = storage.data.write().await;
        let release = async move { drop(writer) };
        let (len, ()) = tokio::join!(storage.len(), release);
        assert_eq!(len, 1);
    }
}
