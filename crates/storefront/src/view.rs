//! Render-ready view model: what the presentation layer consumes.

use serde::Serialize;

use supplestore_catalog::{Product, ProductId};

use crate::filter::FilterState;
use crate::pagination::PaginationState;
use crate::sidebar::{Sidebar, sidebar};
use crate::title::display_title;

/// One product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub price_cents: u64,
    pub rating: u8,
    pub review_count: u32,
    pub tag: Option<String>,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            price_cents: product.price.cents(),
            rating: product.rating.stars(),
            review_count: product.review_count,
            tag: product.tag.clone(),
            image: product.image.clone(),
        }
    }
}

/// Page navigation controls. Only present when there is more than one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Nothing matched the active filters. A valid state, offered with a way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: &'static str,
    pub clear_filters_href: String,
}

pub const EMPTY_MESSAGE: &str = "No se encontraron productos con los filtros seleccionados.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontView {
    pub title: String,
    /// Exactly the number of products matching the filters, across all pages.
    pub result_count: usize,
    pub products: Vec<ProductCard>,
    pub current_page: usize,
    pub total_pages: usize,
    pub pagination: Option<PaginationControls>,
    pub empty: Option<EmptyState>,
    pub filters: FilterState,
    pub sidebar: Sidebar,
    pub href: String,
}

impl StorefrontView {
    /// Derive the view from the products matching `filters` and the current
    /// page.
    ///
    /// `base_path` is the location that clears every filter; `href` is the
    /// current location.
    pub fn derive(
        filtered: &[&Product],
        filters: &FilterState,
        pagination: &PaginationState,
        base_path: &str,
        href: String,
    ) -> Self {
        let page = pagination.page(filtered);
        let current_page = pagination.current_page();

        let controls = (page.total_pages > 1).then(|| PaginationControls {
            pages: (1..=page.total_pages).collect(),
            current_page,
            has_previous: current_page > 1,
            has_next: current_page < page.total_pages,
        });

        let empty = filtered.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE,
            clear_filters_href: base_path.to_string(),
        });

        Self {
            title: display_title(filters),
            result_count: filtered.len(),
            products: page.items.iter().map(|p| ProductCard::from(*p)).collect(),
            current_page,
            total_pages: page.total_pages,
            pagination: controls,
            empty,
            filters: filters.clone(),
            sidebar: sidebar(filters),
            href,
        }
    }
}
