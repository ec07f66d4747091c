//! `supplestore-storefront`: the filter-and-paginate engine.
//!
//! Data flows one way: URL state → [`FilterState`] → [`apply_filters`] →
//! [`paginate`] → [`StorefrontView`]. Mutations flow back through the
//! [`FilterState`] reducer and are written to the [`UrlStateProvider`].
//!
//! Everything except [`Storefront`] is a pure function of its inputs.

pub mod engine;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod sidebar;
pub mod title;
pub mod view;

pub use engine::{Storefront, StorefrontError};
pub use filter::{FilterAction, FilterKey, FilterState, apply_filters, matches};
pub use pagination::{PRODUCTS_PER_PAGE, Page, PaginationState, go_to_page, paginate, total_pages};
pub use query::{InMemoryUrlState, QueryParams, UrlStateProvider};
pub use sidebar::{FilterGroup, FilterOption, Sidebar, sidebar};
pub use title::{DEFAULT_TITLE, display_title};
pub use view::{EmptyState, PaginationControls, ProductCard, StorefrontView};
