//! Boolean registries over host storage
//!
//! A present key holds [`ENTRY_PRESENT`]; setting an entry to false removes
//! the key, so absent means false. Both registries reject duplicate inserts
//! and removals of absent entries instead of treating them as no-ops.

pub mod delegate;
pub mod whitelist;

pub use delegate::DelegateRegistry;
pub use whitelist::WhitelistRegistry;

use charter_core::effects::{StorageEffects, StorageError};
use charter_core::CharterResult;

/// Value stored under a key whose entry is true
pub const ENTRY_PRESENT: &[u8] = &[1];

async fn read_flag<S: StorageEffects + ?Sized>(storage: &S, key: &str) -> CharterResult<bool> {
    match storage.retrieve(key).await? {
        None => Ok(false),
        Some(value) if value == ENTRY_PRESENT => Ok(true),
        Some(_) => Err(StorageError::Corrupt {
            key: key.to_string(),
        }
        .into()),
    }
}

async fn set_flag<S: StorageEffects + ?Sized>(storage: &S, key: &str) -> CharterResult<()> {
    storage.store(key, ENTRY_PRESENT.to_vec()).await?;
    Ok(())
}

async fn clear_flag<S: StorageEffects + ?Sized>(storage: &S, key: &str) -> CharterResult<()> {
    storage.remove(key).await?;
    Ok(())
}
