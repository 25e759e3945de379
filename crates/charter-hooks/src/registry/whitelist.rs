//! Whitelist registry
//!
//! Tracks which (child IP, minter) pairs may register a derivative under a
//! scope. A zero minter is the wildcard; wildcard and specific entries for the
//! same child are stored independently and never touch each other.

use super::{clear_flag, read_flag, set_flag};
use crate::keys::WhitelistKey;
use charter_core::effects::StorageEffects;
use charter_core::{CharterError, CharterResult};
use tracing::debug;

/// Outcome of resolving a minter against the whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistMatch {
    /// The exact (child, minter) entry is present
    Specific,
    /// Only the wildcard entry for the child is present
    Wildcard,
}

/// Whitelist entries stored under a namespace
#[derive(Debug)]
pub struct WhitelistRegistry<'a, S: ?Sized> {
    storage: &'a S,
    namespace: &'a str,
}

impl<'a, S: StorageEffects + ?Sized> WhitelistRegistry<'a, S> {
    /// Create a registry view over `storage`
    pub fn new(storage: &'a S, namespace: &'a str) -> Self {
        Self { storage, namespace }
    }

    /// Whether the exact entry is present
    pub async fn contains(&self, key: &WhitelistKey) -> CharterResult<bool> {
        let present = read_flag(self.storage, &key.storage_key(self.namespace)).await?;
        debug!(
            ip_id = %key.ip_id,
            child_ip = %key.child_ip,
            minter = %key.minter,
            present,
            "whitelist lookup"
        );
        Ok(present)
    }

    /// Resolve a minter: the specific entry first, then the wildcard.
    ///
    /// Returns `None` when neither is present.
    pub async fn resolve(&self, key: &WhitelistKey) -> CharterResult<Option<WhitelistMatch>> {
        if self.contains(key).await? {
            return Ok(Some(WhitelistMatch::Specific));
        }
        if !key.is_wildcard() && self.contains(&key.wildcard()).await? {
            return Ok(Some(WhitelistMatch::Wildcard));
        }
        Ok(None)
    }

    /// Add a whitelist entry.
    ///
    /// # Errors
    ///
    /// `AddressAlreadyWhitelisted` if the exact entry is already present.
    pub async fn insert(&self, key: &WhitelistKey) -> CharterResult<()> {
        if self.contains(key).await? {
            return Err(CharterError::AddressAlreadyWhitelisted {
                child_ip: key.child_ip,
                minter: key.minter,
            });
        }
        set_flag(self.storage, &key.storage_key(self.namespace)).await
    }

    /// Remove a whitelist entry.
    ///
    /// # Errors
    ///
    /// `AddressNotInWhitelist` if the exact entry is absent.
    pub async fn remove(&self, key: &WhitelistKey) -> CharterResult<()> {
        if !self.contains(key).await? {
            return Err(CharterError::AddressNotInWhitelist {
                child_ip: key.child_ip,
                minter: key.minter,
            });
        }
        clear_flag(self.storage, &key.storage_key(self.namespace)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charter_core::{Address, IpId, LicenseScope, LicenseTemplate, LicenseTermsId};
    use charter_testkit::MemoryStorageHandler;

    fn key(minter: Address) -> WhitelistKey {
        let scope = LicenseScope::new(
            IpId::new(Address::from_label(b"parent")),
            LicenseTemplate::new(Address::from_label(b"pil")),
            LicenseTermsId::new(100),
        );
        WhitelistKey::new(
            Address::from_label(b"owner"),
            &scope,
            IpId::new(Address::from_label(b"child")),
            minter,
        )
    }

    #[tokio::test]
    async fn test_resolve_prefers_specific() {
        let storage = MemoryStorageHandler::new();
        let registry = WhitelistRegistry::new(&storage, "charter");
        let bob = key(Address::from_label(b"bob"));

        assert_eq!(registry.resolve(&bob).await.unwrap(), None);

        registry.insert(&bob.wildcard()).await.unwrap();
        assert_eq!(
            registry.resolve(&bob).await.unwrap(),
            Some(WhitelistMatch::Wildcard)
        );

        registry.insert(&bob).await.unwrap();
        assert_eq!(
            registry.resolve(&bob).await.unwrap(),
            Some(WhitelistMatch::Specific)
        );
    }

    #[tokio::test]
    async fn test_specific_and_wildcard_are_independent() {
        let storage = MemoryStorageHandler::new();
        let registry = WhitelistRegistry::new(&storage, "charter");
        let bob = key(Address::from_label(b"bob"));

        registry.insert(&bob.wildcard()).await.unwrap();
        registry.insert(&bob).await.unwrap();
        registry.remove(&bob).await.unwrap();

        assert!(registry.contains(&bob.wildcard()).await.unwrap());
        assert!(matches!(
            registry.remove(&bob).await,
            Err(CharterError::AddressNotInWhitelist { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_insert_reports_child_and_minter() {
        let storage = MemoryStorageHandler::new();
        let registry = WhitelistRegistry::new(&storage, "charter");
        let bob = key(Address::from_label(b"bob"));

        registry.insert(&bob).await.unwrap();
        let err = registry.insert(&bob).await.unwrap_err();
        assert_eq!(
            err,
            CharterError::AddressAlreadyWhitelisted {
                child_ip: bob.child_ip,
                minter: bob.minter,
            }
        );
    }
}
