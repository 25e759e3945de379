//! Storage Effects Trait Definitions
//!
//! Key/value substrate provided by the host. Each call is expected to be
//! durable and atomic on its own; the licensing hook never needs more than one
//! write per operation.

use async_trait::async_trait;

/// Storage operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Write failed
    #[error("write failed for {key}: {reason}")]
    WriteFailed {
        /// Key being written
        key: String,
        /// Backend-specific reason
        reason: String,
    },
    /// Read failed
    #[error("read failed for {key}: {reason}")]
    ReadFailed {
        /// Key being read
        key: String,
        /// Backend-specific reason
        reason: String,
    },
    /// Stored value could not be interpreted
    #[error("corrupt value at {key}")]
    Corrupt {
        /// Key holding the bad value
        key: String,
    },
}

/// Key/value storage
#[async_trait]
pub trait StorageEffects: Send + Sync {
    /// Store a value under a key, replacing any previous value
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Retrieve the value under a key
    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove a key, returning whether it existed
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Whether a key exists
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;
}
