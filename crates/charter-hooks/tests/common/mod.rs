//! Shared setup for licensing hook integration tests

#![allow(dead_code)]

use charter_core::{Address, CharterConfig, IpId, LicenseScope};
use charter_hooks::{
    DerivativeRegistration, LicenseTokenMint, OwnerOnlyGuard, WhitelistLicensingHook,
};
use charter_testkit::{LicensingWorld, MockEffects};

pub type TestHook = WhitelistLicensingHook<MockEffects, OwnerOnlyGuard>;

/// Standard world plus a hook over its effects
pub fn setup() -> (LicensingWorld, TestHook) {
    let world = LicensingWorld::new();
    let hook =
        WhitelistLicensingHook::with_owner_guard(world.effects.clone(), CharterConfig::default())
            .expect("default config is valid");
    (world, hook)
}

pub fn registration(
    caller: Address,
    child_ip: IpId,
    scope: &LicenseScope,
) -> DerivativeRegistration {
    DerivativeRegistration {
        caller,
        child_ip,
        parent_ip: scope.ip_id,
        license_template: scope.license_template,
        license_terms_id: scope.license_terms_id,
        hook_data: Vec::new(),
    }
}

pub fn mint(caller: Address, scope: &LicenseScope, amount: u64) -> LicenseTokenMint {
    LicenseTokenMint {
        caller,
        licensor_ip: scope.ip_id,
        license_template: scope.license_template,
        license_terms_id: scope.license_terms_id,
        amount,
        receiver: caller,
        hook_data: Vec::new(),
    }
}
