//! Reference catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where reference catalogs are loaded from
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; built-in catalogs are used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Check if the built-in catalogs should be used
    pub fn uses_builtin(&self) -> bool {
        self.path.is_none()
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin() {
        let config = CatalogConfig::default();
        assert!(config.uses_builtin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = CatalogConfig {
            path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyCatalogPath));
    }
}
