//! Standard licensing fixture
//!
//! Owner `owner` controls parent IP `parent`, which has terms `T100` of the
//! `pil` template attached with a per-token minting fee of 100. A second set
//! of terms, `T200`, is attached with fee 200 so scope isolation can be
//! exercised without extra setup.

use crate::MockEffects;
use charter_core::{Address, IpId, LicenseScope, LicenseTemplate, LicenseTermsId};

/// Minting fee of the primary terms
pub const T100_FEE: u128 = 100;
/// Minting fee of the secondary terms
pub const T200_FEE: u128 = 200;

/// Identities and effects for a licensing scenario
#[derive(Debug, Clone)]
pub struct LicensingWorld {
    /// Shared mock effects
    pub effects: MockEffects,
    /// Owner of `parent`
    pub owner: Address,
    /// Parent IP
    pub parent: IpId,
    /// License template
    pub template: LicenseTemplate,
    /// Primary terms (fee 100)
    pub t100: LicenseTermsId,
    /// Secondary terms (fee 200)
    pub t200: LicenseTermsId,
    /// First child IP
    pub child_c1: IpId,
    /// Second child IP
    pub child_c2: IpId,
    /// Regular minter
    pub bob: Address,
    /// Second minter
    pub carol: Address,
    /// Address used as a delegate
    pub dave: Address,
    /// Address with no standing anywhere
    pub mallory: Address,
}

impl LicensingWorld {
    /// Build the standard world
    pub fn new() -> Self {
        let effects = MockEffects::new();
        let owner = Address::from_label(b"owner");
        let parent = IpId::new(Address::from_label(b"parent-ip"));
        let template = LicenseTemplate::new(Address::from_label(b"pil-template"));
        let t100 = LicenseTermsId::new(100);
        let t200 = LicenseTermsId::new(200);

        effects.registry.register_ip(parent, owner);
        effects.registry.attach_license(parent, template, t100);
        effects.registry.attach_license(parent, template, t200);
        effects.registry.set_minting_fee(template, t100, T100_FEE);
        effects.registry.set_minting_fee(template, t200, T200_FEE);

        Self {
            effects,
            owner,
            parent,
            template,
            t100,
            t200,
            child_c1: IpId::new(Address::from_label(b"child-c1")),
            child_c2: IpId::new(Address::from_label(b"child-c2")),
            bob: Address::from_label(b"bob"),
            carol: Address::from_label(b"carol"),
            dave: Address::from_label(b"dave"),
            mallory: Address::from_label(b"mallory"),
        }
    }

    /// Scope of the primary terms
    pub fn scope(&self) -> LicenseScope {
        LicenseScope::new(self.parent, self.template, self.t100)
    }

    /// Scope of the secondary terms
    pub fn scope_t200(&self) -> LicenseScope {
        LicenseScope::new(self.parent, self.template, self.t200)
    }
}

impl Default for LicensingWorld {
    fn default() -> Self {
        Self::new()
    }
}
