//! Domain event plumbing.
//!
//! Events are plain serializable structs. `domain_event!` gives them the
//! identity the transport needs, and `EventEnvelope` carries them across the
//! `EventPublisher` port as JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{DomainError, ErrorCode, Timestamp};

/// Identity and routing information every domain event exposes.
pub trait DomainEvent: Send + Sync {
    /// Versioned routing key, e.g. `assessment.scored.v1`.
    fn event_type(&self) -> &'static str;

    fn schema_version(&self) -> u32;

    /// String form of the ID of the aggregate the event is about.
    fn aggregate_id(&self) -> String;

    fn aggregate_type(&self) -> &'static str;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Envelope conversion for every serializable event.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements `DomainEvent` by naming the struct fields that hold each part
/// of the event identity.
///
/// ```ignore
/// domain_event!(
///     AssessmentScored,
///     event_type = "assessment.scored.v1",
///     schema_version = 1,
///     aggregate_id = assessment_id,
///     aggregate_type = "Assessment",
///     occurred_at = scored_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event:ident,
        event_type = $event_type:expr,
        schema_version = $version:expr,
        aggregate_id = $aggregate_field:ident,
        aggregate_type = $aggregate_type:expr,
        occurred_at = $at_field:ident,
        event_id = $id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $version
            }

            fn aggregate_id(&self) -> String {
                self.$aggregate_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $aggregate_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$at_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$id_field.clone()
            }
        }
    };
}

pub use domain_event;

/// Unique event identifier, used by consumers for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Random v4 UUID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request context attached to an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Caller-supplied request ID, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// An event serialized for transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    #[serde(default)]
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Serializes `event` into a new envelope.
    ///
    /// # Errors
    /// - `InternalError` if the payload cannot be represented as JSON
    pub fn from_event<T>(event: &T) -> Result<Self, DomainError>
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        let payload = serde_json::to_value(event).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Cannot serialize {} payload: {}", event.event_type(), e),
            )
        })?;

        Ok(Self {
            event_id: event.event_id(),
            event_type: event.event_type().to_string(),
            schema_version: event.schema_version(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload,
            metadata: EventMetadata::default(),
        })
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(correlation_id.into());
        self
    }

    /// Restores the typed event from the payload.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
