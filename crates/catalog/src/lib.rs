//! Product catalog for the supplement storefront.
//!
//! This crate holds the read-only product records the storefront filters and
//! paginates, the catalog provider seam, and the cart collaborator the storefront
//! delegates `add_to_cart` to. No filtering logic lives here.

pub mod cart;
pub mod demo;
pub mod error;
pub mod product;
pub mod provider;
pub mod taxonomy;

pub use cart::{CartLine, CartSink, InMemoryCart};
pub use error::{CartError, CatalogError};
pub use product::{Price, Product, ProductId, Rating};
pub use provider::{CatalogProvider, InMemoryCatalog};
pub use taxonomy::{Activity, Category, Goal};
