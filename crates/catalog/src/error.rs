//! Catalog and cart errors.

use std::path::PathBuf;

use thiserror::Error;

use supplestore_core::DomainError;

use crate::product::ProductId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("cart already holds {limit} units of product {product_id}")]
    LineLimitReached { product_id: ProductId, limit: u32 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
