//! Effect interfaces
//!
//! Pure trait signatures for everything the licensing hook consumes from its
//! host. Implementations live with the host (or in `charter-testkit` for
//! tests); the hook only ever sees these traits.
//!
//! All collaborator queries are read-only. A collaborator error aborts the
//! enclosing operation; nothing here retries.

pub mod facts;
pub mod license;
pub mod ownership;
pub mod storage;
pub mod supertraits;

pub use facts::FactEffects;
pub use license::{LicenseRegistryEffects, LicenseTermsEffects};
pub use ownership::OwnershipEffects;
pub use storage::{StorageEffects, StorageError};
pub use supertraits::LicensingEffects;
