//! In-memory event bus implementation for testing.
//!
//! Captures every published envelope so tests can assert on what a handler
//! emitted. Can be switched into a failing mode to exercise error paths.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus for testing.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(command).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("assessment.scored.v1"));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    failure: RwLock<Option<String>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus that rejects every publish with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let bus = Self::default();
        bus.fail_with(reason);
        bus
    }

    /// Makes subsequent publishes fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = Some(reason.into());
    }

    // === Test Helpers ===

    /// Returns all published events in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Clears all published events (for test isolation).
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let failure = self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(reason) = failure {
            return Err(DomainError::new(ErrorCode::EventPublishFailed, reason)
                .with_detail("event_type", event.event_type));
        }

        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
