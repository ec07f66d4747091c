use anyhow::Context;
use serde::Serialize;

use supplestore_catalog::{CartLine, InMemoryCart, ProductId};
use supplestore_storefront::{InMemoryUrlState, Storefront, StorefrontView, UrlStateProvider};

use crate::args::Args;
use crate::config::StorefrontConfig;

/// What the shopper ends up looking at.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub view: StorefrontView,
    pub cart: CartSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: String,
    pub lines: Vec<CartLine>,
}

impl From<&InMemoryCart> for CartSummary {
    fn from(cart: &InMemoryCart) -> Self {
        Self {
            item_count: cart.item_count(),
            subtotal: cart.subtotal().to_string(),
            lines: cart.lines().to_vec(),
        }
    }
}

/// Replay the requested actions against a fresh storefront session.
///
/// Order: toggles, reset, page navigation, then add-to-cart.
pub fn run(args: &Args) -> anyhow::Result<Outcome> {
    let config = StorefrontConfig::from_args(args);
    let catalog = config.load_catalog().context("failed to load catalog")?;

    let query = args.query.trim_start_matches('?');
    let url = InMemoryUrlState::from_href(&format!("{}?{}", config.base_path, query));
    let mut store = Storefront::new(catalog, url, InMemoryCart::new());

    tracing::debug!(
        session_id = %store.session_id(),
        href = %store.url().href(),
        "session started"
    );

    for action in &args.toggles {
        store.dispatch(action.clone());
    }
    if args.reset {
        store.reset_filters();
    }
    if let Some(page) = args.page {
        store.go_to_page(page);
    }
    for id in &args.add_to_cart {
        store
            .add_to_cart(ProductId(*id))
            .with_context(|| format!("failed to add product {id} to the cart"))?;
    }

    let view = store.view();
    Ok(Outcome {
        view,
        cart: CartSummary::from(store.cart()),
    })
}
