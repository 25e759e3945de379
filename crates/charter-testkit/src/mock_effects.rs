//! Mock effects implementation for testing
//!
//! `MockEffects` bundles storage, the IP registry and a fact sink so one value
//! satisfies `LicensingEffects`. Clones share all state, which lets a test keep
//! a handle for setup and inspection while the hook owns another.

use crate::{MemoryStorageHandler, MockIpRegistry, RecordingFactSink};
use async_trait::async_trait;
use charter_core::effects::{
    FactEffects, LicenseRegistryEffects, LicenseTermsEffects, OwnershipEffects, StorageEffects,
    StorageError,
};
use charter_core::{
    Address, CharterResult, IpId, LicenseTemplate, LicenseTermsId, LicensingHookFact,
};

/// Composite mock implementing every Charter effect trait
#[derive(Debug, Clone, Default)]
pub struct MockEffects {
    /// Key/value storage
    pub storage: MemoryStorageHandler,
    /// Ownership, attachments and fees
    pub registry: MockIpRegistry,
    /// Emitted facts
    pub facts: RecordingFactSink,
}

impl MockEffects {
    /// Create empty mock effects
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnershipEffects for MockEffects {
    async fn owner_of(&self, ip_id: &IpId) -> CharterResult<Address> {
        self.registry.owner_of(ip_id).await
    }
}

#[async_trait]
impl LicenseRegistryEffects for MockEffects {
    async fn is_license_attached(
        &self,
        ip_id: &IpId,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<bool> {
        self.registry
            .is_license_attached(ip_id, license_template, license_terms_id)
            .await
    }
}

#[async_trait]
impl LicenseTermsEffects for MockEffects {
    async fn minting_fee(
        &self,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<u128> {
        self.registry
            .minting_fee(license_template, license_terms_id)
            .await
    }
}

#[async_trait]
impl StorageEffects for MockEffects {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.storage.store(key, value).await
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.storage.retrieve(key).await
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.storage.remove(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.storage.exists(key).await
    }
}

#[async_trait]
impl FactEffects for MockEffects {
    async fn emit_fact(&self, fact: LicensingHookFact) {
        self.facts.emit_fact(fact).await;
    }
}
