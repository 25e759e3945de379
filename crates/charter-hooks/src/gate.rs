//! Access gate
//!
//! Sits above both registries and answers the two questions the hook asks:
//!
//! - may `caller` administer this scope's whitelist? (owner or delegate)
//! - may `minter` register `child_ip` under this scope? (specific entry or
//!   wildcard)
//!
//! Each evaluation resolves the owner exactly once, through
//! `OwnershipEffects`, and builds every key it reads from that single answer.
//! Nothing is cached between evaluations.

use crate::keys::{DelegateKey, WhitelistKey};
use crate::registry::whitelist::WhitelistMatch;
use crate::registry::{DelegateRegistry, WhitelistRegistry};
use charter_core::effects::{OwnershipEffects, StorageEffects};
use charter_core::{Address, CharterError, CharterResult, IpId, LicenseScope};
use tracing::debug;

/// Owner-or-delegate and whitelist resolution over host effects
#[derive(Debug)]
pub struct AccessGate<'a, E: ?Sized> {
    effects: &'a E,
    namespace: &'a str,
}

impl<'a, E> AccessGate<'a, E>
where
    E: OwnershipEffects + StorageEffects + ?Sized,
{
    /// Create a gate over `effects`, reading keys under `namespace`
    pub fn new(effects: &'a E, namespace: &'a str) -> Self {
        Self { effects, namespace }
    }

    /// Delegate registry view
    pub fn delegates(&self) -> DelegateRegistry<'a, E> {
        DelegateRegistry::new(self.effects, self.namespace)
    }

    /// Whitelist registry view
    pub fn whitelist(&self) -> WhitelistRegistry<'a, E> {
        WhitelistRegistry::new(self.effects, self.namespace)
    }

    /// Current owner of the scope's parent IP
    pub async fn resolve_owner(&self, scope: &LicenseScope) -> CharterResult<Address> {
        self.effects.owner_of(&scope.ip_id).await
    }

    /// Pass if `caller` owns the parent IP or is a delegate for `scope`.
    ///
    /// Returns the owner resolved for this evaluation so the caller can key
    /// its own reads and writes off the same answer.
    ///
    /// # Errors
    ///
    /// `NotOwnerOrDelegate` if the caller has no standing.
    pub async fn verify_owner_or_delegate(
        &self,
        scope: &LicenseScope,
        caller: Address,
    ) -> CharterResult<Address> {
        let owner = self.resolve_owner(scope).await?;
        if caller == owner {
            debug!(%scope, %caller, "caller is owner");
            return Ok(owner);
        }

        let key = DelegateKey::new(owner, scope, caller);
        if self.delegates().contains(&key).await? {
            debug!(%scope, %caller, "caller is delegate");
            return Ok(owner);
        }

        Err(CharterError::NotOwnerOrDelegate { caller, owner })
    }

    /// Pass if `minter` may register `child_ip` under `scope`.
    ///
    /// The specific entry is consulted before the wildcard; either one
    /// admits the minter.
    ///
    /// # Errors
    ///
    /// `AddressNotWhitelisted` if neither entry is present.
    pub async fn check_whitelist(
        &self,
        scope: &LicenseScope,
        child_ip: IpId,
        minter: Address,
    ) -> CharterResult<WhitelistMatch> {
        let owner = self.resolve_owner(scope).await?;
        let key = WhitelistKey::new(owner, scope, child_ip, minter);

        match self.whitelist().resolve(&key).await? {
            Some(matched) => {
                debug!(%scope, %child_ip, %minter, ?matched, "whitelist check passed");
                Ok(matched)
            }
            None => Err(CharterError::AddressNotWhitelisted { child_ip, minter }),
        }
    }
}
