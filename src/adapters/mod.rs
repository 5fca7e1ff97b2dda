//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - Reference catalog sources (built-in, YAML file)
//! - `events` - Event publishers (in-memory, tracing)

pub mod catalog;
pub mod events;

pub use catalog::{BuiltinCatalogSource, YamlFileCatalogSource};
pub use events::{InMemoryEventBus, TracingEventPublisher};
