//! Core identifier types
//!
//! Every participant in the licensing flow is named by a 20-byte address:
//! callers, owners, delegates, minters, IP accounts and license templates.
//! The newtypes below keep the roles apart at the type level.

use crate::hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of an address in bytes
pub const ADDRESS_LEN: usize = 20;

/// Error parsing an address from its hex form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressParseError {
    /// The string was not valid hex
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// The decoded value had the wrong length
    #[error("expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// A 20-byte account address
///
/// The all-zero address is reserved as the wildcard minter: a whitelist
/// entry with a zero minter admits any caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The zero address, used as the wildcard minter
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Derive a stable address from a label.
    ///
    /// Takes the first 20 bytes of the BLAKE3 digest of `label`. Used to mint
    /// deterministic identities in tests and fixtures.
    pub fn from_label(label: &[u8]) -> Self {
        let digest = hash::hash(label);
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[..ADDRESS_LEN]);
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the zero (wildcard) address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let decoded =
            hex::decode(digits).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        let bytes: [u8; ADDRESS_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| AddressParseError::InvalidLength(decoded.len()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

/// IP account identifier
///
/// Names both parent (licensor) and child (derivative) IP.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct IpId(pub Address);

impl IpId {
    /// Create from an address
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Get the underlying address
    pub fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for IpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ip-{}", self.0)
    }
}

impl From<Address> for IpId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

/// License template identifier (the template contract address)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct LicenseTemplate(pub Address);

impl LicenseTemplate {
    /// Create from an address
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Get the underlying address
    pub fn address(&self) -> Address {
        self.0
    }
}

impl fmt::Display for LicenseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template-{}", self.0)
    }
}

impl From<Address> for LicenseTemplate {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

/// License terms identifier within a template
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct LicenseTermsId(pub u64);

impl LicenseTermsId {
    /// Create a new terms id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LicenseTermsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "terms-{}", self.0)
    }
}

impl From<u64> for LicenseTermsId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
