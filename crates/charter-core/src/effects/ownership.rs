//! Ownership Effects Trait Definitions
//!
//! Resolves the controlling address of an IP account. The answer may change
//! between any two calls, so callers must query on every operation and never
//! cache the result.

use crate::identifiers::{Address, IpId};
use crate::CharterResult;
use async_trait::async_trait;

/// Owner resolution for IP accounts
#[async_trait]
pub trait OwnershipEffects: Send + Sync {
    /// Current owner of `ip_id`
    async fn owner_of(&self, ip_id: &IpId) -> CharterResult<Address>;
}
