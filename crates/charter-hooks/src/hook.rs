//! Licensing hook contract
//!
//! The host licensing pipeline calls these entry points synchronously while it
//! processes a license token mint or a derivative registration. A returned
//! error aborts the host operation; a returned fee is what the host charges.

use async_trait::async_trait;
use charter_core::hash;
use charter_core::{Address, CharterResult, IpId, LicenseScope, LicenseTemplate, LicenseTermsId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-byte interface tag used for capability discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceId(pub [u8; 4]);

impl InterfaceId {
    /// Interface-discovery interface itself
    pub const INTERFACE_DISCOVERY: InterfaceId = InterfaceId([0x01, 0xff, 0xc9, 0xa7]);

    /// Derive a tag from an interface name (first four bytes of its BLAKE3
    /// digest)
    pub fn derive(name: &str) -> Self {
        let digest = hash::hash(name.as_bytes());
        Self([digest[0], digest[1], digest[2], digest[3]])
    }

    /// Tag of the base module interface
    pub fn module() -> Self {
        Self::derive("charter.IModule")
    }

    /// Tag of the licensing hook interface
    pub fn licensing_hook() -> Self {
        Self::derive("charter.ILicensingHook")
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// A request to mint license tokens directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseTokenMint {
    /// Address requesting the mint
    pub caller: Address,
    /// IP whose license is being minted
    pub licensor_ip: IpId,
    /// License template
    pub license_template: LicenseTemplate,
    /// License terms
    pub license_terms_id: LicenseTermsId,
    /// Number of tokens
    pub amount: u64,
    /// Recipient of the tokens
    pub receiver: Address,
    /// Opaque data forwarded by the host
    pub hook_data: Vec<u8>,
}

impl LicenseTokenMint {
    /// Scope of the license being minted
    pub fn scope(&self) -> LicenseScope {
        LicenseScope::new(self.licensor_ip, self.license_template, self.license_terms_id)
    }
}

/// A request to register a child IP as a derivative of a parent IP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeRegistration {
    /// Address requesting the registration
    pub caller: Address,
    /// Child IP being registered
    pub child_ip: IpId,
    /// Parent IP
    pub parent_ip: IpId,
    /// License template
    pub license_template: LicenseTemplate,
    /// License terms
    pub license_terms_id: LicenseTermsId,
    /// Opaque data forwarded by the host
    pub hook_data: Vec<u8>,
}

impl DerivativeRegistration {
    /// Scope of the parent license
    pub fn scope(&self) -> LicenseScope {
        LicenseScope::new(self.parent_ip, self.license_template, self.license_terms_id)
    }
}

/// Lifecycle hooks invoked by the host licensing pipeline
#[async_trait]
pub trait LicensingHook: Send + Sync {
    /// Module name reported to the host
    fn name(&self) -> &str;

    /// Whether this hook implements the interface tagged `interface_id`
    fn supports_interface(&self, interface_id: InterfaceId) -> bool;

    /// Called before license tokens are minted; returns the total fee
    async fn before_mint_license_tokens(&self, request: &LicenseTokenMint) -> CharterResult<u128>;

    /// Called before a derivative is registered; returns the minting fee
    async fn before_register_derivative(
        &self,
        request: &DerivativeRegistration,
    ) -> CharterResult<u128>;

    /// Fee the host would charge for `request.amount` tokens
    async fn calculate_minting_fee(&self, request: &LicenseTokenMint) -> CharterResult<u128>;
}
