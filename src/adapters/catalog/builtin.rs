//! Built-in reference catalogs.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::assessment::{CatalogError, ReferenceCatalogs};
use crate::ports::ReferenceCatalogSource;

/// Serves the catalogs compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl ReferenceCatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<Arc<ReferenceCatalogs>, CatalogError> {
        let catalogs = ReferenceCatalogs::builtin();
        catalogs.validate()?;
        Ok(catalogs)
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_shared_builtin_catalogs() {
        let first = BuiltinCatalogSource.load().await.unwrap();
        let second = BuiltinCatalogSource.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.archetypes.len(), 4);
    }
}
