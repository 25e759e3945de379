//! Recording fact sink

use async_trait::async_trait;
use charter_core::effects::FactEffects;
use charter_core::LicensingHookFact;
use std::sync::{Arc, Mutex, PoisonError};

/// Fact sink that keeps every emitted fact in order
#[derive(Debug, Clone, Default)]
pub struct RecordingFactSink {
    facts: Arc<Mutex<Vec<LicensingHookFact>>>,
}

impl RecordingFactSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All facts emitted so far
    pub fn facts(&self) -> Vec<LicensingHookFact> {
        self.facts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recently emitted fact
    pub fn last(&self) -> Option<LicensingHookFact> {
        self.facts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of facts emitted
    pub fn len(&self) -> usize {
        self.facts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no facts were emitted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FactEffects for RecordingFactSink {
    async fn emit_fact(&self, fact: LicensingHookFact) {
        tracing::trace!(fact_type = fact.fact_type(), "recorded fact");
        self.facts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fact);
    }
}
