//! # Charter Hooks
//!
//! Whitelist and delegation gate for derivative registration.
//!
//! An IP owner decides, per (parent IP, license template, license terms),
//! which minters may register which child IPs as derivatives. The owner can
//! appoint delegates to administer that whitelist on their behalf. The host
//! licensing pipeline consults the gate through [`LicensingHook`] before it
//! finalizes a registration.
//!
//! ## Layers
//!
//! - [`keys`]: composite keys, always built from a freshly resolved owner
//! - [`registry`]: the delegate and whitelist boolean stores
//! - [`gate`]: owner-or-delegate and specific-or-wildcard resolution
//! - [`guard`]: owner-only pre-check for delegate administration
//! - [`module`]: [`WhitelistLicensingHook`], the transactional surface
//!
//! ## Example
//!
//! ```rust,ignore
//! let hook = WhitelistLicensingHook::with_owner_guard(effects, CharterConfig::default())?;
//! hook.add_to_whitelist(owner, &scope, child_ip, minter).await?;
//! let fee = hook.before_register_derivative(&registration).await?;
//! ```

#![forbid(unsafe_code)]

pub mod gate;
pub mod guard;
pub mod hook;
pub mod keys;
pub mod module;
pub mod registry;

pub use gate::AccessGate;
pub use guard::{CapabilityGuard, HostEnforcedGuard, OwnerOnlyGuard};
pub use hook::{DerivativeRegistration, InterfaceId, LicenseTokenMint, LicensingHook};
pub use keys::{DelegateKey, WhitelistKey};
pub use module::{total_minting_fee, WhitelistLicensingHook};
pub use registry::whitelist::WhitelistMatch;
pub use registry::{DelegateRegistry, WhitelistRegistry};
