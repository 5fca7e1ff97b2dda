//! Reference catalog source adapters.
//!
//! - `BuiltinCatalogSource` - Catalogs compiled into the crate
//! - `YamlFileCatalogSource` - Catalogs read from a YAML file

mod builtin;
mod yaml_file;

pub use builtin::BuiltinCatalogSource;
pub use yaml_file::YamlFileCatalogSource;
