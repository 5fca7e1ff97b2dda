//! YAML file catalog source.
//!
//! The file mirrors `ReferenceCatalogs`:
//!
//! ```yaml
//! base_weights:
//!   standard: { D1: 0.125, D2: 0.125, ... }
//!   small_medium: { D1: 0.10, D2: 0.15, ... }
//! context_factors:
//!   - { name: organisation_size, weight: 0.12 }
//!   - { name: data_maturity, weight: 0.08, inverted: true }
//! archetypes:
//!   - name: Balanced Transformer
//!     description: ...
//!     template: { D1: 0.65, ... }
//!     bias: { D1: 0.0, ... }
//! critical_pairs:
//!   - { a: D6, b: D3, label: Technology vs. culture }
//! ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::domain::assessment::{CatalogError, ReferenceCatalogs};
use crate::ports::ReferenceCatalogSource;

/// Loads catalogs from a YAML document on disk.
#[derive(Debug, Clone)]
pub struct YamlFileCatalogSource {
    path: PathBuf,
}

impl YamlFileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses and validates a YAML catalog document.
    pub fn parse(content: &str) -> Result<ReferenceCatalogs, CatalogError> {
        let catalogs: ReferenceCatalogs =
            serde_yaml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalogs.validate()?;
        Ok(catalogs)
    }
}

#[async_trait]
impl ReferenceCatalogSource for YamlFileCatalogSource {
    async fn load(&self) -> Result<Arc<ReferenceCatalogs>, CatalogError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => "not found".to_string(),
                ErrorKind::PermissionDenied => "permission denied".to_string(),
                _ => e.to_string(),
            };
            CatalogError::Io(format!("{}: {}", self.path.display(), reason))
        })?;

        Self::parse(&content).map(Arc::new)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
