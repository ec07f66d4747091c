//! Runtime configuration resolved from flags and `STOREFRONT_*` variables.

use std::path::PathBuf;

use supplestore_catalog::{CatalogError, InMemoryCatalog};
use supplestore_observability::LogFormat;

use crate::args::Args;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_path: Option<PathBuf>,
    pub base_path: String,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    pub fn from_args(args: &Args) -> Self {
        let base_path = if args.base_path.is_empty() {
            "/".to_string()
        } else {
            args.base_path.clone()
        };
        Self {
            catalog_path: args.catalog.clone(),
            base_path,
            log_format: args.log_format,
        }
    }

    /// The configured catalog file, or the bundled demo catalog.
    pub fn load_catalog(&self) -> Result<InMemoryCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => InMemoryCatalog::from_json_file(path),
            None => {
                tracing::warn!("no catalog configured; using the bundled demo catalog");
                Ok(InMemoryCatalog::demo())
            }
        }
    }
}
