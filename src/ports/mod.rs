//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventPublisher` - Publishing domain events
//! - `ReferenceCatalogSource` - Loading reference catalogs at start-up

mod catalog_source;
mod event_publisher;

pub use catalog_source::ReferenceCatalogSource;
pub use event_publisher::EventPublisher;
