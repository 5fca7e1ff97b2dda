//! EventPublisher port - Interface for publishing domain events.
//!
//! The application layer publishes scoring outcomes through this port
//! without knowing the transport (in-memory capture, structured logs, ...).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must propagate delivery failures to the caller.
///
/// # Example
///
/// ```ignore
/// let envelope = AssessmentScored::from_result(id, None, &result).to_envelope()?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
