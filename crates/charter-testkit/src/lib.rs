//! Charter Testkit
//!
//! Deterministic, in-memory implementations of every effect trait in
//! `charter-core`, plus a fixture with the standard cast of identities.
//!
//! - [`MemoryStorageHandler`]: key/value storage with write-failure injection
//! - [`MockIpRegistry`]: ownership, license attachment and minting fees
//! - [`RecordingFactSink`]: captures emitted facts
//! - [`MockEffects`]: all of the above behind one `LicensingEffects` value
//! - [`LicensingWorld`]: owner, parent IP, terms and minters ready to use

#![forbid(unsafe_code)]

pub mod facts;
pub mod fixtures;
pub mod mock_effects;
pub mod registry;
pub mod storage;

pub use facts::RecordingFactSink;
pub use fixtures::LicensingWorld;
pub use mock_effects::MockEffects;
pub use registry::MockIpRegistry;
pub use storage::MemoryStorageHandler;
