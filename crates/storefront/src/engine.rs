//! The storefront engine: owns pagination, reads filters from the URL provider,
//! writes filter changes back to it and delegates add-to-cart.

use thiserror::Error;

use supplestore_catalog::{CartError, CartSink, CatalogProvider, Product, ProductId};
use supplestore_core::{Reducer, SessionId};

use crate::filter::{FilterAction, FilterKey, FilterState, apply_filters};
use crate::pagination::{PaginationState, total_pages};
use crate::query::{QueryParams, UrlStateProvider};
use crate::view::StorefrontView;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),

    #[error("cart rejected product {product_id}: {source}")]
    Cart {
        product_id: ProductId,
        #[source]
        source: CartError,
    },
}

/// One browsing session over a catalog.
///
/// The URL provider is the source of truth for filters: it is read at the start
/// of every derivation, so navigation performed outside the engine is picked up
/// (and resets the page) on the next call.
#[derive(Debug)]
pub struct Storefront<C, U, K> {
    session_id: SessionId,
    catalog: C,
    url: U,
    cart: K,
    pagination: PaginationState,
    observed: FilterState,
}

impl<C, U, K> Storefront<C, U, K>
where
    C: CatalogProvider,
    U: UrlStateProvider,
    K: CartSink,
{
    pub fn new(catalog: C, url: U, cart: K) -> Self {
        let observed = url.filters();
        Self {
            session_id: SessionId::new(),
            catalog,
            url,
            cart,
            pagination: PaginationState::new(),
            observed,
        }
    }

    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    /// Mutable access to the URL provider, for navigation performed outside
    /// the storefront.
    pub fn url_mut(&mut self) -> &mut U {
        &mut self.url
    }

    pub fn cart(&self) -> &K {
        &self.cart
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Filters as currently persisted in the URL.
    pub fn filters(&self) -> FilterState {
        self.url.filters()
    }

    /// Products matching the current filters, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        apply_filters(self.catalog.products(), &self.url.filters())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.pagination.per_page())
    }

    /// Derive the full view for the current URL and page.
    pub fn view(&mut self) -> StorefrontView {
        let filters = self.sync_with_url();
        let filtered = apply_filters(self.catalog.products(), &filters);

        // The catalog may have shrunk underneath us; fall back to the first page
        // rather than render an empty page past the end.
        let pages = total_pages(filtered.len(), self.pagination.per_page());
        if pages >= 1 && self.pagination.current_page() > pages {
            tracing::debug!(
                session_id = %self.session_id,
                page = self.pagination.current_page(),
                total_pages = pages,
                "current page out of range, resetting"
            );
            self.pagination.reset();
        }

        StorefrontView::derive(
            &filtered,
            &filters,
            &self.pagination,
            self.url.base_path(),
            self.url.href(),
        )
    }

    /// Apply a filter action: reduce, persist to the URL, reset to page 1.
    pub fn dispatch(&mut self, action: FilterAction) -> FilterState {
        let current = self.sync_with_url();
        let next = current.reduce(&action);

        let params = match action {
            FilterAction::Reset => QueryParams::new(),
            FilterAction::Toggle { .. } => self.url.query().with_filters(&next),
        };
        self.url.set_query(params);
        self.observed = next.clone();
        self.pagination.reset();

        tracing::info!(
            session_id = %self.session_id,
            action = ?action,
            category = next.category.as_deref().unwrap_or("-"),
            goal = next.goal.as_deref().unwrap_or("-"),
            activity = next.activity.as_deref().unwrap_or("-"),
            "filters updated"
        );
        next
    }

    /// Select `value` on `key`, or clear it if it is already selected.
    pub fn toggle_filter(&mut self, key: FilterKey, value: Option<&str>) -> FilterState {
        let action = match value {
            Some(value) => FilterAction::toggle(key, value),
            None => FilterAction::Toggle { key, value: None },
        };
        self.dispatch(action)
    }

    /// Clear every filter dimension at once.
    pub fn reset_filters(&mut self) -> FilterState {
        self.dispatch(FilterAction::Reset)
    }

    /// Navigate to `requested`; out-of-range requests leave the page unchanged.
    pub fn go_to_page(&mut self, requested: i64) -> usize {
        self.sync_with_url();
        let total = self.total_pages();
        let before = self.pagination.current_page();
        let after = self.pagination.go_to(requested, total);
        if before == after {
            tracing::debug!(
                session_id = %self.session_id,
                requested,
                total_pages = total,
                "page request ignored"
            );
        } else {
            tracing::debug!(session_id = %self.session_id, page = after, "page changed");
        }
        after
    }

    pub fn next_page(&mut self) -> usize {
        self.sync_with_url();
        let total = self.total_pages();
        self.pagination.next(total)
    }

    pub fn previous_page(&mut self) -> usize {
        self.sync_with_url();
        let total = self.total_pages();
        self.pagination.previous(total)
    }

    /// Hand a catalog product to the cart collaborator.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), StorefrontError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or(StorefrontError::ProductNotFound(product_id))?;

        self.cart
            .add_to_cart(product)
            .map_err(|source| StorefrontError::Cart { product_id, source })?;

        tracing::info!(session_id = %self.session_id, %product_id, "added to cart");
        Ok(())
    }

    /// Read the filters from the URL; if they changed since the last look,
    /// go back to the first page.
    fn sync_with_url(&mut self) -> FilterState {
        let current = self.url.filters();
        if current != self.observed {
            tracing::debug!(
                session_id = %self.session_id,
                href = %self.url.href(),
                "filters changed outside the storefront, resetting page"
            );
            self.pagination.reset();
            self.observed = current.clone();
        }
        current
    }
}
