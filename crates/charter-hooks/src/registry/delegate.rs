//! Delegate registry
//!
//! Tracks which addresses an owner has authorized to administer the owner's
//! whitelist for one scope. This is a leaf store: it knows nothing about who
//! is calling. Owner-only enforcement happens in front of it.

use super::{clear_flag, read_flag, set_flag};
use crate::keys::DelegateKey;
use charter_core::effects::StorageEffects;
use charter_core::{CharterError, CharterResult};
use tracing::debug;

/// Delegate entries stored under a namespace
#[derive(Debug)]
pub struct DelegateRegistry<'a, S: ?Sized> {
    storage: &'a S,
    namespace: &'a str,
}

impl<'a, S: StorageEffects + ?Sized> DelegateRegistry<'a, S> {
    /// Create a registry view over `storage`
    pub fn new(storage: &'a S, namespace: &'a str) -> Self {
        Self { storage, namespace }
    }

    /// Whether the delegate entry is present
    pub async fn contains(&self, key: &DelegateKey) -> CharterResult<bool> {
        let present = read_flag(self.storage, &key.storage_key(self.namespace)).await?;
        debug!(ip_id = %key.ip_id, delegate = %key.delegate, present, "delegate lookup");
        Ok(present)
    }

    /// Add a delegate entry.
    ///
    /// # Errors
    ///
    /// `DelegateAlreadyAdded` if the entry is already present.
    pub async fn insert(&self, key: &DelegateKey) -> CharterResult<()> {
        if self.contains(key).await? {
            return Err(CharterError::DelegateAlreadyAdded {
                ip_id: key.ip_id,
                delegate: key.delegate,
            });
        }
        set_flag(self.storage, &key.storage_key(self.namespace)).await
    }

    /// Remove a delegate entry.
    ///
    /// # Errors
    ///
    /// `DelegateNotFound` if the entry is absent.
    pub async fn remove(&self, key: &DelegateKey) -> CharterResult<()> {
        if !self.contains(key).await? {
            return Err(CharterError::DelegateNotFound {
                ip_id: key.ip_id,
                delegate: key.delegate,
            });
        }
        clear_flag(self.storage, &key.storage_key(self.namespace)).await
    }
}
