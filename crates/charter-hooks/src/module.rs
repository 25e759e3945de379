//! Whitelist licensing hook
//!
//! Hosts the delegate and whitelist registries behind one transaction lock
//! and implements [`LicensingHook`] on top of the access gate.
//!
//! Every operation runs to completion under the lock, so invocations never
//! interleave. Each mutating operation performs all of its checks before its
//! single storage write, and emits its fact only after that write succeeds: a
//! failure at any step leaves state and the fact stream untouched. The owner
//! is resolved once per operation and keys every read and write it makes.

use crate::gate::AccessGate;
use crate::guard::{CapabilityGuard, OwnerOnlyGuard};
use crate::hook::{DerivativeRegistration, InterfaceId, LicenseTokenMint, LicensingHook};
use crate::keys::{DelegateKey, WhitelistKey};
use async_trait::async_trait;
use charter_core::effects::LicensingEffects;
use charter_core::{
    Address, CharterConfig, CharterError, CharterResult, ConfigLoader, IpId, LicenseScope,
    LicensingHookFact,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Whitelist + delegation gate for derivative registration
#[derive(Debug)]
pub struct WhitelistLicensingHook<E, G> {
    effects: E,
    guard: G,
    config: CharterConfig,
    txn: Mutex<()>,
}

impl<E: LicensingEffects> WhitelistLicensingHook<E, OwnerOnlyGuard> {
    /// Create a hook whose delegate administration is restricted to the
    /// current owner
    pub fn with_owner_guard(effects: E, config: CharterConfig) -> CharterResult<Self> {
        Self::new(effects, OwnerOnlyGuard, config)
    }
}

impl<E: LicensingEffects, G: CapabilityGuard> WhitelistLicensingHook<E, G> {
    /// Create a hook.
    ///
    /// # Errors
    ///
    /// `Invalid` if `config` fails validation.
    pub fn new(effects: E, guard: G, config: CharterConfig) -> CharterResult<Self> {
        config.validate()?;
        Ok(Self {
            effects,
            guard,
            config,
            txn: Mutex::new(()),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &CharterConfig {
        &self.config
    }

    /// Host effects
    pub fn effects(&self) -> &E {
        &self.effects
    }

    fn gate(&self) -> AccessGate<'_, E> {
        AccessGate::new(&self.effects, &self.config.storage_namespace)
    }

    async fn require_license_attached(&self, scope: &LicenseScope) -> CharterResult<()> {
        let attached = self
            .effects
            .is_license_attached(&scope.ip_id, &scope.license_template, scope.license_terms_id)
            .await?;
        if !attached {
            return Err(CharterError::LicenseNotAttached {
                ip_id: scope.ip_id,
                license_template: scope.license_template,
                license_terms_id: scope.license_terms_id,
            });
        }
        Ok(())
    }

    async fn per_unit_fee(&self, scope: &LicenseScope) -> CharterResult<u128> {
        self.effects
            .minting_fee(&scope.license_template, scope.license_terms_id)
            .await
    }

    /// Appoint `delegate` as an administrator of `scope`'s whitelist.
    ///
    /// # Errors
    ///
    /// - guard rejection (`PermissionDenied` with [`OwnerOnlyGuard`])
    /// - `LicenseNotAttached` if the terms are not attached to the parent IP
    /// - `DelegateAlreadyAdded` if `delegate` is already appointed
    pub async fn add_delegate(
        &self,
        caller: Address,
        scope: &LicenseScope,
        delegate: Address,
    ) -> CharterResult<()> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.resolve_owner(scope).await?;
        self.guard.enforce(caller, owner, scope).await?;
        self.require_license_attached(scope).await?;

        gate.delegates()
            .insert(&DelegateKey::new(owner, scope, delegate))
            .await?;

        info!(%scope, %owner, %delegate, "delegate added");
        self.effects
            .emit_fact(LicensingHookFact::delegate_added(scope, delegate))
            .await;
        Ok(())
    }

    /// Revoke `delegate`'s administration of `scope`'s whitelist.
    ///
    /// # Errors
    ///
    /// - guard rejection (`PermissionDenied` with [`OwnerOnlyGuard`])
    /// - `DelegateNotFound` if `delegate` is not appointed
    pub async fn remove_delegate(
        &self,
        caller: Address,
        scope: &LicenseScope,
        delegate: Address,
    ) -> CharterResult<()> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.resolve_owner(scope).await?;
        self.guard.enforce(caller, owner, scope).await?;

        gate.delegates()
            .remove(&DelegateKey::new(owner, scope, delegate))
            .await?;

        info!(%scope, %owner, %delegate, "delegate removed");
        self.effects
            .emit_fact(LicensingHookFact::delegate_removed(scope, delegate))
            .await;
        Ok(())
    }

    /// Whether `delegate` currently administers `scope`'s whitelist.
    ///
    /// Raises no domain error; collaborator and storage failures still
    /// propagate.
    pub async fn is_delegate(
        &self,
        scope: &LicenseScope,
        delegate: Address,
    ) -> CharterResult<bool> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.resolve_owner(scope).await?;
        gate.delegates()
            .contains(&DelegateKey::new(owner, scope, delegate))
            .await
    }

    /// Permit `minter` (zero for anyone) to register `child_ip` under `scope`.
    ///
    /// # Errors
    ///
    /// - `NotOwnerOrDelegate` if `caller` has no standing
    /// - `LicenseNotAttached` if the terms are not attached to the parent IP
    /// - `AddressAlreadyWhitelisted` if the entry is already present
    pub async fn add_to_whitelist(
        &self,
        caller: Address,
        scope: &LicenseScope,
        child_ip: IpId,
        minter: Address,
    ) -> CharterResult<()> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.verify_owner_or_delegate(scope, caller).await?;
        self.require_license_attached(scope).await?;

        gate.whitelist()
            .insert(&WhitelistKey::new(owner, scope, child_ip, minter))
            .await?;

        info!(%scope, %caller, %child_ip, %minter, "address whitelisted");
        self.effects
            .emit_fact(LicensingHookFact::address_whitelisted(scope, child_ip, minter))
            .await;
        Ok(())
    }

    /// Withdraw `minter`'s permission to register `child_ip` under `scope`.
    ///
    /// # Errors
    ///
    /// - `NotOwnerOrDelegate` if `caller` has no standing
    /// - `AddressNotInWhitelist` if the entry is absent
    pub async fn remove_from_whitelist(
        &self,
        caller: Address,
        scope: &LicenseScope,
        child_ip: IpId,
        minter: Address,
    ) -> CharterResult<()> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.verify_owner_or_delegate(scope, caller).await?;

        gate.whitelist()
            .remove(&WhitelistKey::new(owner, scope, child_ip, minter))
            .await?;

        info!(%scope, %caller, %child_ip, %minter, "address removed from whitelist");
        self.effects
            .emit_fact(LicensingHookFact::address_removed(scope, child_ip, minter))
            .await;
        Ok(())
    }

    /// Whether the exact (`child_ip`, `minter`) entry is present.
    ///
    /// Does not apply the wildcard. Raises no domain error; collaborator and
    /// storage failures still propagate.
    pub async fn is_whitelisted(
        &self,
        scope: &LicenseScope,
        child_ip: IpId,
        minter: Address,
    ) -> CharterResult<bool> {
        let _txn = self.txn.lock().await;
        let gate = self.gate();
        let owner = gate.resolve_owner(scope).await?;
        gate.whitelist()
            .contains(&WhitelistKey::new(owner, scope, child_ip, minter))
            .await
    }
}

/// `per_unit_fee × amount`, failing on overflow
pub fn total_minting_fee(per_unit_fee: u128, amount: u64) -> CharterResult<u128> {
    per_unit_fee
        .checked_mul(u128::from(amount))
        .ok_or(CharterError::FeeOverflow {
            per_unit_fee,
            amount,
        })
}

#[async_trait]
impl<E: LicensingEffects, G: CapabilityGuard> LicensingHook for WhitelistLicensingHook<E, G> {
    fn name(&self) -> &str {
        &self.config.module_name
    }

    fn supports_interface(&self, interface_id: InterfaceId) -> bool {
        interface_id == InterfaceId::licensing_hook()
            || interface_id == InterfaceId::module()
            || interface_id == InterfaceId::INTERFACE_DISCOVERY
    }

    async fn before_mint_license_tokens(&self, request: &LicenseTokenMint) -> CharterResult<u128> {
        debug!(
            caller = %request.caller,
            licensor_ip = %request.licensor_ip,
            amount = request.amount,
            "direct license token mint rejected"
        );
        Err(CharterError::MintLicenseTokensDisabled)
    }

    async fn before_register_derivative(
        &self,
        request: &DerivativeRegistration,
    ) -> CharterResult<u128> {
        let _txn = self.txn.lock().await;
        let scope = request.scope();

        if let Err(err) = self
            .gate()
            .check_whitelist(&scope, request.child_ip, request.caller)
            .await
        {
            warn!(
                %scope,
                caller = %request.caller,
                child_ip = %request.child_ip,
                error = %err,
                "derivative registration rejected"
            );
            return Err(err);
        }

        let fee = total_minting_fee(self.per_unit_fee(&scope).await?, 1)?;
        debug!(%scope, child_ip = %request.child_ip, fee, "derivative registration admitted");
        Ok(fee)
    }

    async fn calculate_minting_fee(&self, request: &LicenseTokenMint) -> CharterResult<u128> {
        let per_unit = self.per_unit_fee(&request.scope()).await?;
        total_minting_fee(per_unit, request.amount)
    }
}
