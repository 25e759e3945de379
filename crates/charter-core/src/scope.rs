//! License scope
//!
//! A scope names one license attached to one parent IP. Delegate and
//! whitelist entries are namespaced under a scope *and* the owner of the
//! parent IP at the time of the call; the owner is never stored here; callers
//! resolve it fresh through `OwnershipEffects` on every operation.

use crate::identifiers::{IpId, LicenseTemplate, LicenseTermsId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// (parent IP, license template, license terms) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LicenseScope {
    /// Parent (licensor) IP
    pub ip_id: IpId,
    /// License template the terms belong to
    pub license_template: LicenseTemplate,
    /// Terms within the template
    pub license_terms_id: LicenseTermsId,
}

impl LicenseScope {
    /// Create a new scope
    pub fn new(
        ip_id: IpId,
        license_template: LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> Self {
        Self {
            ip_id,
            license_template,
            license_terms_id,
        }
    }

    /// Same parent IP and template under different terms
    pub fn with_terms(&self, license_terms_id: LicenseTermsId) -> Self {
        Self {
            license_terms_id,
            ..*self
        }
    }
}

impl fmt::Display for LicenseScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.ip_id, self.license_template, self.license_terms_id
        )
    }
}
