//! License registry and license terms effect traits

use crate::identifiers::{IpId, LicenseTemplate, LicenseTermsId};
use crate::CharterResult;
use async_trait::async_trait;

/// Read access to the host license registry
#[async_trait]
pub trait LicenseRegistryEffects: Send + Sync {
    /// Whether `license_terms_id` of `license_template` is currently attached
    /// to `ip_id`
    async fn is_license_attached(
        &self,
        ip_id: &IpId,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<bool>;
}

/// Read access to license terms
#[async_trait]
pub trait LicenseTermsEffects: Send + Sync {
    /// Minting fee charged per license token under these terms
    async fn minting_fee(
        &self,
        license_template: &LicenseTemplate,
        license_terms_id: LicenseTermsId,
    ) -> CharterResult<u128>;
}
