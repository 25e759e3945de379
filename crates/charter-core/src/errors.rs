//! Unified error system for Charter
//!
//! One error type covers every failure the licensing hook can report. Domain
//! variants carry the identifiers that triggered them so callers can diagnose
//! a rejection without knowing the storage layout. Every error is terminal for
//! the invocation that raised it.

use crate::identifiers::{Address, IpId, LicenseTemplate, LicenseTermsId};
use serde::{Deserialize, Serialize};

/// Coarse classification of a [`CharterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Caller lacks standing for the scope
    Authorization,
    /// Attempted to create an entry that already exists
    StateConflict,
    /// Attempted to remove an entry that does not exist
    StateAbsent,
    /// Referenced license is not attached to the parent IP
    Precondition,
    /// Derivative registration rejected by the whitelist
    PermissionDeniedAtRegistration,
    /// Operation is closed by policy
    PolicyDisabled,
    /// Collaborator, storage, serialization or input failure
    Infrastructure,
}

/// Unified error type for all Charter operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CharterError {
    /// Caller is neither the owner of the parent IP nor one of its delegates
    #[error("{caller} is not the owner ({owner}) or a delegate")]
    NotOwnerOrDelegate {
        /// Address that attempted the mutation
        caller: Address,
        /// Resolved owner of the parent IP
        owner: Address,
    },

    /// Capability guard rejected an owner-only operation
    #[error("permission denied: {caller} may not administer {ip_id}")]
    PermissionDenied {
        /// Address that attempted the operation
        caller: Address,
        /// Parent IP the operation targeted
        ip_id: IpId,
    },

    /// Whitelist entry already present
    #[error("{minter} is already whitelisted for {child_ip}")]
    AddressAlreadyWhitelisted {
        /// Child IP of the entry
        child_ip: IpId,
        /// Minter of the entry
        minter: Address,
    },

    /// Delegate entry already present
    #[error("{delegate} is already a delegate for {ip_id}")]
    DelegateAlreadyAdded {
        /// Parent IP of the scope
        ip_id: IpId,
        /// Delegate address
        delegate: Address,
    },

    /// Whitelist entry not present
    #[error("{minter} is not in the whitelist for {child_ip}")]
    AddressNotInWhitelist {
        /// Child IP of the entry
        child_ip: IpId,
        /// Minter of the entry
        minter: Address,
    },

    /// Delegate entry not present
    #[error("{delegate} is not a delegate for {ip_id}")]
    DelegateNotFound {
        /// Parent IP of the scope
        ip_id: IpId,
        /// Delegate address
        delegate: Address,
    },

    /// License terms are not attached to the parent IP
    #[error("{license_template}/{license_terms_id} is not attached to {ip_id}")]
    LicenseNotAttached {
        /// Parent IP
        ip_id: IpId,
        /// License template
        license_template: LicenseTemplate,
        /// License terms
        license_terms_id: LicenseTermsId,
    },

    /// Neither a specific nor a wildcard whitelist entry admits the caller
    #[error("{minter} is not whitelisted to register {child_ip}")]
    AddressNotWhitelisted {
        /// Child IP being registered
        child_ip: IpId,
        /// Caller attempting the registration
        minter: Address,
    },

    /// Direct license token minting is closed
    #[error("minting license tokens is disabled")]
    MintLicenseTokensDisabled,

    /// Fee computation overflowed
    #[error("fee overflow: {per_unit_fee} x {amount}")]
    FeeOverflow {
        /// Per-unit fee reported by the license terms
        per_unit_fee: u128,
        /// Requested amount
        amount: u64,
    },

    /// External collaborator failed
    #[error("Collaborator error: {message}")]
    Collaborator {
        /// Error message describing the collaborator failure
        message: String,
    },

    /// Storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },
}

impl CharterError {
    /// Create a collaborator error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotOwnerOrDelegate { .. } | Self::PermissionDenied { .. } => {
                ErrorCategory::Authorization
            }
            Self::AddressAlreadyWhitelisted { .. } | Self::DelegateAlreadyAdded { .. } => {
                ErrorCategory::StateConflict
            }
            Self::AddressNotInWhitelist { .. } | Self::DelegateNotFound { .. } => {
                ErrorCategory::StateAbsent
            }
            Self::LicenseNotAttached { .. } => ErrorCategory::Precondition,
            Self::AddressNotWhitelisted { .. } => ErrorCategory::PermissionDeniedAtRegistration,
            Self::MintLicenseTokensDisabled => ErrorCategory::PolicyDisabled,
            Self::FeeOverflow { .. }
            | Self::Collaborator { .. }
            | Self::Storage { .. }
            | Self::Serialization { .. }
            | Self::Invalid { .. } => ErrorCategory::Infrastructure,
        }
    }
}

/// Standard Result type for Charter operations
pub type Result<T> = std::result::Result<T, CharterError>;

impl From<crate::effects::StorageError> for CharterError {
    fn from(err: crate::effects::StorageError) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<serde_json::Error> for CharterError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CharterError {
    fn from(err: toml::de::Error) -> Self {
        Self::invalid(format!("Invalid TOML: {err}"))
    }
}

impl From<std::io::Error> for CharterError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}
