//! Cart collaborator.
//!
//! The storefront only ever calls [`CartSink::add_to_cart`]; totals, checkout and
//! persistence belong to whoever implements the sink. [`InMemoryCart`] is the
//! implementation used by the CLI and tests.

use chrono::{DateTime, Utc};
use serde::Serialize;

use supplestore_core::{CartId, DomainError, DomainResult};

use crate::error::CartError;
use crate::product::{Price, Product, ProductId};

/// Receives products the shopper adds from the grid.
pub trait CartSink {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError>;
}

impl<T> CartSink for &mut T
where
    T: CartSink + ?Sized,
{
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        (**self).add_to_cart(product)
    }
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// In-memory cart. Adding a product already in the cart bumps its quantity.
#[derive(Debug, Clone)]
pub struct InMemoryCart {
    id: CartId,
    lines: Vec<CartLine>,
    line_limit: Option<u32>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            line_limit: None,
        }
    }

    /// Cap the quantity of any single product.
    pub fn with_line_limit(mut self, limit: u32) -> Self {
        self.line_limit = Some(limit);
        self
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    pub fn subtotal(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::ZERO, |acc, line| acc.saturating_add(line.line_total()))
    }
}

impl Default for InMemoryCart {
    fn default() -> Self {
        Self::new()
    }
}

/// Products without a price cannot be sold.
fn ensure_sellable(product: &Product) -> DomainResult<()> {
    if product.price == Price::ZERO {
        return Err(DomainError::validation(format!(
            "product {} has no price",
            product.id
        )));
    }
    Ok(())
}

impl CartSink for InMemoryCart {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        ensure_sellable(product)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if let Some(limit) = self.line_limit {
                if line.quantity >= limit {
                    return Err(CartError::LineLimitReached {
                        product_id: product.id,
                        limit,
                    });
                }
            }
            line.quantity += 1;
            tracing::debug!(
                cart_id = %self.id,
                product_id = %product.id,
                quantity = line.quantity,
                "cart line incremented"
            );
            return Ok(());
        }

        if self.line_limit == Some(0) {
            return Err(CartError::LineLimitReached {
                product_id: product.id,
                limit: 0,
            });
        }

        self.lines.push(CartLine {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            quantity: 1,
            added_at: Utc::now(),
        });
        tracing::debug!(cart_id = %self.id, product_id = %product.id, "cart line added");
        Ok(())
    }
}
