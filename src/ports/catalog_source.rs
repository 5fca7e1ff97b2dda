//! ReferenceCatalogSource port - Where reference catalogs come from.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::assessment::{CatalogError, ReferenceCatalogs};

/// Port for loading the static reference catalogs.
///
/// Called once at start-up. Implementations return catalogs that have
/// already passed `ReferenceCatalogs::validate`.
#[async_trait]
pub trait ReferenceCatalogSource: Send + Sync {
    /// Load and validate the catalogs.
    async fn load(&self) -> Result<Arc<ReferenceCatalogs>, CatalogError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
