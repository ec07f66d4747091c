//! Catalog provider seam and the in-memory implementation.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use supplestore_core::DomainError;

use crate::demo;
use crate::error::CatalogError;
use crate::product::{Product, ProductId};

/// Read accessor for the ordered product sequence.
///
/// The storefront never mutates the catalog; order is significant because
/// filtering and pagination preserve it.
pub trait CatalogProvider {
    fn products(&self) -> &[Product];

    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

impl<T> CatalogProvider for Arc<T>
where
    T: CatalogProvider + ?Sized,
{
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn find(&self, id: ProductId) -> Option<&Product> {
        (**self).find(id)
    }
}

impl<T> CatalogProvider for &T
where
    T: CatalogProvider + ?Sized,
{
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn find(&self, id: ProductId) -> Option<&Product> {
        (**self).find(id)
    }
}

/// In-memory catalog backed by a `Vec`, in supplied order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id
                ))
                .into());
            }
        }
        Ok(Self { products })
    }

    /// The bundled demo catalog.
    pub fn demo() -> Self {
        Self {
            products: demo::demo_products(),
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
