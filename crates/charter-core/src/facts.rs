//! Licensing Hook Domain Facts
//!
//! Pure fact types for delegate and whitelist state changes. A fact is emitted
//! once per committed mutation, after the storage write succeeds.

use crate::errors::{CharterError, Result};
use crate::identifiers::{Address, IpId, LicenseTemplate, LicenseTermsId};
use crate::scope::LicenseScope;
use serde::{Deserialize, Serialize};

/// Type identifier for licensing hook facts
pub const LICENSING_FACT_TYPE_ID: &str = "charter/licensing/v1";
/// Schema version for licensing hook facts
pub const LICENSING_FACT_SCHEMA_VERSION: u16 = 1;

/// Versioned wrapper around an encoded fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEnvelope {
    /// Fact family identifier
    pub type_id: String,
    /// Schema version of the payload
    pub schema_version: u16,
    /// JSON-encoded fact
    pub payload: Vec<u8>,
}

/// Facts for licensing hook state changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum LicensingHookFact {
    /// Owner appointed a delegate for a scope
    DelegateAdded {
        /// Parent IP
        ip_id: IpId,
        /// License template
        license_template: LicenseTemplate,
        /// License terms
        license_terms_id: LicenseTermsId,
        /// Appointed delegate
        delegate: Address,
    },

    /// Owner removed a delegate from a scope
    DelegateRemoved {
        /// Parent IP
        ip_id: IpId,
        /// License template
        license_template: LicenseTemplate,
        /// License terms
        license_terms_id: LicenseTermsId,
        /// Removed delegate
        delegate: Address,
    },

    /// Minter whitelisted to register a child IP
    AddressWhitelisted {
        /// Parent IP
        ip_id: IpId,
        /// License template
        license_template: LicenseTemplate,
        /// License terms
        license_terms_id: LicenseTermsId,
        /// Child IP the entry covers
        child_ip: IpId,
        /// Whitelisted minter (zero for any caller)
        minter: Address,
    },

    /// Minter removed from a child IP's whitelist
    AddressRemovedFromWhitelist {
        /// Parent IP
        ip_id: IpId,
        /// License template
        license_template: LicenseTemplate,
        /// License terms
        license_terms_id: LicenseTermsId,
        /// Child IP the entry covered
        child_ip: IpId,
        /// Removed minter
        minter: Address,
    },
}

impl LicensingHookFact {
    /// Fact for an added delegate
    pub fn delegate_added(scope: &LicenseScope, delegate: Address) -> Self {
        Self::DelegateAdded {
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            delegate,
        }
    }

    /// Fact for a removed delegate
    pub fn delegate_removed(scope: &LicenseScope, delegate: Address) -> Self {
        Self::DelegateRemoved {
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            delegate,
        }
    }

    /// Fact for a whitelisted minter
    pub fn address_whitelisted(scope: &LicenseScope, child_ip: IpId, minter: Address) -> Self {
        Self::AddressWhitelisted {
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            child_ip,
            minter,
        }
    }

    /// Fact for a removed whitelist entry
    pub fn address_removed(scope: &LicenseScope, child_ip: IpId, minter: Address) -> Self {
        Self::AddressRemovedFromWhitelist {
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            child_ip,
            minter,
        }
    }

    /// Parent IP this fact concerns
    pub fn ip_id(&self) -> IpId {
        match self {
            Self::DelegateAdded { ip_id, .. }
            | Self::DelegateRemoved { ip_id, .. }
            | Self::AddressWhitelisted { ip_id, .. }
            | Self::AddressRemovedFromWhitelist { ip_id, .. } => *ip_id,
        }
    }

    /// Scope this fact concerns
    pub fn scope(&self) -> LicenseScope {
        match self {
            Self::DelegateAdded {
                ip_id,
                license_template,
                license_terms_id,
                ..
            }
            | Self::DelegateRemoved {
                ip_id,
                license_template,
                license_terms_id,
                ..
            }
            | Self::AddressWhitelisted {
                ip_id,
                license_template,
                license_terms_id,
                ..
            }
            | Self::AddressRemovedFromWhitelist {
                ip_id,
                license_template,
                license_terms_id,
                ..
            } => LicenseScope::new(*ip_id, *license_template, *license_terms_id),
        }
    }

    /// Get the fact type name
    pub fn fact_type(&self) -> &'static str {
        match self {
            Self::DelegateAdded { .. } => "delegate_added",
            Self::DelegateRemoved { .. } => "delegate_removed",
            Self::AddressWhitelisted { .. } => "address_whitelisted",
            Self::AddressRemovedFromWhitelist { .. } => "address_removed_from_whitelist",
        }
    }

    /// Encode this fact with a versioned envelope.
    ///
    /// # Errors
    ///
    /// Returns `CharterError::Serialization` if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let envelope = FactEnvelope {
            type_id: LICENSING_FACT_TYPE_ID.to_string(),
            schema_version: LICENSING_FACT_SCHEMA_VERSION,
            payload: serde_json::to_vec(self)?,
        };
        Ok(serde_json::to_vec(&envelope)?)
    }

    /// Decode a fact from a versioned envelope.
    ///
    /// # Errors
    ///
    /// Returns `CharterError::Serialization` if decoding fails or the type id
    /// or schema version does not match.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let envelope: FactEnvelope = serde_json::from_slice(bytes)?;

        if envelope.type_id != LICENSING_FACT_TYPE_ID {
            return Err(CharterError::serialization(format!(
                "fact type mismatch: expected {LICENSING_FACT_TYPE_ID}, got {}",
                envelope.type_id
            )));
        }

        if envelope.schema_version != LICENSING_FACT_SCHEMA_VERSION {
            return Err(CharterError::serialization(format!(
                "fact schema mismatch: expected {LICENSING_FACT_SCHEMA_VERSION}, got {}",
                envelope.schema_version
            )));
        }

        Ok(serde_json::from_slice(&envelope.payload)?)
    }
}
