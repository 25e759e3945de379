//! Capability guards for owner-only operations
//!
//! Delegate administration is restricted to the owner of the parent IP. The
//! restriction is enforced by a guard that runs before the hook's own logic,
//! so hosts that already gate calls through their own permission system can
//! plug in [`HostEnforcedGuard`] instead of paying for a second check.
//!
//! The hook resolves the owner once per operation and hands that answer to
//! the guard; the same owner then keys the delegate entry being written.

use async_trait::async_trait;
use charter_core::{Address, CharterError, CharterResult, LicenseScope};
use tracing::debug;

/// Pre-check run in front of delegate administration
#[async_trait]
pub trait CapabilityGuard: Send + Sync {
    /// Pass if `caller` may administer delegates for `scope`, whose parent IP
    /// is currently owned by `owner`
    async fn enforce(
        &self,
        caller: Address,
        owner: Address,
        scope: &LicenseScope,
    ) -> CharterResult<()>;
}

/// Admits only the current owner of the parent IP
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnlyGuard;

#[async_trait]
impl CapabilityGuard for OwnerOnlyGuard {
    async fn enforce(
        &self,
        caller: Address,
        owner: Address,
        scope: &LicenseScope,
    ) -> CharterResult<()> {
        if caller != owner {
            debug!(%scope, %caller, %owner, "owner guard rejected caller");
            return Err(CharterError::PermissionDenied {
                caller,
                ip_id: scope.ip_id,
            });
        }
        Ok(())
    }
}

/// Guard for hosts that enforce ownership before calling in
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEnforcedGuard;

#[async_trait]
impl CapabilityGuard for HostEnforcedGuard {
    async fn enforce(
        &self,
        _caller: Address,
        _owner: Address,
        _scope: &LicenseScope,
    ) -> CharterResult<()> {
        Ok(())
    }
}
