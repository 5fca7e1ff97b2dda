//! Event publisher that writes envelopes to the tracing pipeline.
//!
//! Used by the binary, where there is no broker: each event becomes one
//! structured `info` record under the `aihe_engine::events` target.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Publishes events as structured log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            target: "aihe_engine::events",
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            occurred_at = %event.occurred_at,
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or(""),
            payload = %event.payload,
            "Domain event published"
        );
        Ok(())
    }
}
