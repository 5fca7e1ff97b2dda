//! Event publishing adapters.
//!
//! - `InMemoryEventBus` - Captures events in memory for tests
//! - `TracingEventPublisher` - Emits events as structured log records

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
