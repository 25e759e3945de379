//! Charter Core - foundation for the licensing hook
//!
//! This crate provides the identifier types, the unified error type and the
//! effect interfaces through which the licensing hook reaches its external
//! collaborators. It contains no registry logic.
//!
//! # Layout
//!
//! - `identifiers`: addresses, IP ids, license template and terms ids
//! - `scope`: the (parent IP, template, terms) license scope
//! - `effects`: ownership, license registry, license terms, storage and fact
//!   sink interfaces
//! - `facts`: observable events emitted by committed mutations
//! - `config` / `logging`: ambient configuration and tracing setup

#![forbid(unsafe_code)]

/// Address and IP identifier types
pub mod identifiers;

/// License scope shared by delegate and whitelist entries
pub mod scope;

/// Unified error handling
pub mod errors;

/// BLAKE3 content hashing
pub mod hash;

/// Effect interfaces for external collaborators
pub mod effects;

/// Observable licensing facts
pub mod facts;

/// Configuration loading and validation
pub mod config;

/// Tracing subscriber setup
pub mod logging;

pub use config::{CharterConfig, ConfigLoader, LoggingConfig};
pub use errors::{CharterError, ErrorCategory, Result as CharterResult};
pub use facts::{FactEnvelope, LicensingHookFact};
pub use hash::Hash32;
pub use identifiers::{Address, IpId, LicenseTemplate, LicenseTermsId};
pub use scope::LicenseScope;
