//! Mock IP registry
//!
//! Stands in for the host's ownership lookup, license registry and license
//! terms. Every collaborator query is counted so tests can assert that
//! ownership is resolved on every operation.
//!
//! # Blocking Lock Usage
//!
//! Uses `std::sync::Mutex`: no lock is held across an `.await`.

use async_trait::async_trait;
use charter_core::effects::{LicenseRegistryEffects, LicenseTermsEffects, OwnershipEffects};
use charter_core::{Address, CharterError, CharterResult, IpId, LicenseTemplate, LicenseTermsId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct RegistryState {
    owners: HashMap<IpId, Address>,
    scripted_owners: HashMap<IpId, VecDeque<Address>>,
    attachments: HashSet<(IpId, LicenseTemplate, LicenseTermsId)>,
    minting_fees: HashMap<(LicenseTemplate, LicenseTermsId), u128>,
    fail_owner_lookups: bool,
    fail_license_lookups: bool,
    owner_lookups: u64,
}

/// In-memory ownership, license attachment and fee tables
#[derive(Debug, Clone, Default)]
pub struct MockIpRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl MockIpRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an IP account with its owner
    pub fn register_ip(&self, ip_id: IpId, owner: Address) {
        self.lock().owners.insert(ip_id, owner);
    }

    /// Change the owner of an IP account
    pub fn transfer(&self, ip_id: IpId, new_owner: Address) {
        self.lock().owners.insert(ip_id, new_owner);
    }

    /// Answer the next owner lookups for `ip_id` with `answers`, in order,
    /// before falling back to the registered owner
    pub fn script_owner_answers(&self, ip_id: IpId, answers: impl IntoIterator<Item = Address>) {
        self.lock()
            .scripted_owners
            .entry(ip_id)
            .or_default()
            .extend(answers);
    }

    /// Attach license terms to an IP account
    pub fn attach_license(
        &self,
        ip_id: IpId,
        license_template: LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) {
        self.lock()
            .attachments
            .insert((ip_id, license_template, license_terms_id));
    }

    /// Detach license terms from an IP account
    pub fn detach_license(
        &self,
        ip_id: IpId,
        license_template: LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) {
        self.lock()
            .attachments
            .remove(&(ip_id, license_template, license_terms_id));
    }

    /// Set the per-token minting fee for license terms
    pub fn set_minting_fee(
        &self,
        license_template: LicenseTemplate,
        license_terms_id: LicenseTermsId,
        fee: u128,
    ) {
        self.lock()
            .minting_fees
            .insert((license_template, license_terms_id), fee);
    }

    /// Make owner lookups fail (or succeed again)
    pub fn set_fail_owner_lookups(&self, fail: bool) {
        self.lock().fail_owner_lookups = fail;
    }

    /// Make license attachment lookups fail (or succeed again)
    pub fn set_fail_license_lookups(&self, fail: bool) {
        self.lock().fail_license_lookups = fail;
    }

    /// Number of owner lookups served so far
    pub fn owner_lookups(&self) -> u64 {
        self.lock().owner_lookups
    }
}

#[async_trait]
impl OwnershipEffects for MockIpRegistry {
    async fn owner_of(&self, ip_id: &IpId) -> CharterResult<Address> {
        let mut state = self.lock();
        state.owner_lookups += 1;
        if state.fail_owner_lookups {
            return Err(CharterError::collaborator("owner lookup unavailable"));
        }
        if let Some(owner) = state
            .scripted_owners
            .get_mut(ip_id)
            .and_then(VecDeque::pop_front)
        {
            return Ok(owner);
        }
        state
            .owners
            .get(ip_id)
            .copied()
            .ok_or_else(|| CharterError::collaborator(format!("unknown IP account {ip_id}")))
    }
}

#[async_trait]
impl LicenseRegistryEffects for MockIpRegistry {
    async fn is_license_attached(
        &self,
        ip_id: &IpId,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<bool> {
        let state = self.lock();
        if state.fail_license_lookups {
            return Err(CharterError::collaborator("license registry unavailable"));
        }
        Ok(state
            .attachments
            .contains(&(*ip_id, *license_template, license_terms_id)))
    }
}

#[async_trait]
impl LicenseTermsEffects for MockIpRegistry {
    async fn minting_fee(
        &self,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<u128> {
        self.lock()
            .minting_fees
            .get(&(*license_template, license_terms_id))
            .copied()
            .ok_or_else(|| {
                CharterError::collaborator(format!(
                    "unknown license terms {license_template}/{license_terms_id}"
                ))
            })
    }
}
