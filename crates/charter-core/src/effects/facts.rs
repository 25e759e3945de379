//! Fact sink for observable events

use crate::facts::LicensingHookFact;
use async_trait::async_trait;

/// Receives facts for committed mutations
///
/// Emission happens after the mutation is committed and cannot fail; a sink
/// that needs to persist facts must buffer internally.
#[async_trait]
pub trait FactEffects: Send + Sync {
    /// Publish a fact
    async fn emit_fact(&self, fact: LicensingHookFact);
}
