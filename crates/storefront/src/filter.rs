//! Filter state, the toggle reducer and the filter predicate.
//!
//! Filter values are kept as raw strings: a value outside the known taxonomy is
//! tolerated and simply matches no product.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use supplestore_catalog::Product;
use supplestore_core::{DomainError, Reducer};

/// One filter dimension. Each holds at most one active value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Category,
    Goal,
    Activity,
}

impl FilterKey {
    /// All dimensions, in URL and sidebar order.
    pub const ALL: [FilterKey; 3] = [FilterKey::Category, FilterKey::Goal, FilterKey::Activity];

    /// Query-parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Category => "category",
            FilterKey::Goal => "goal",
            FilterKey::Activity => "activity",
        }
    }

    /// The product's tag for this dimension, as a slug.
    pub fn product_value(&self, product: &Product) -> Option<&'static str> {
        match self {
            FilterKey::Category => product.category_slug(),
            FilterKey::Goal => product.goal_slug(),
            FilterKey::Activity => product.activity_slug(),
        }
    }
}

impl core::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FilterKey::Category),
            "goal" => Ok(FilterKey::Goal),
            "activity" => Ok(FilterKey::Activity),
            other => Err(DomainError::validation(format!(
                "unknown filter key: {other} (expected category, goal or activity)"
            ))),
        }
    }
}

/// Current filter selections. `None` means the dimension imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<String>,
    pub goal: Option<String>,
    pub activity: Option<String>,
}

impl FilterState {
    /// Empty state: no active filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Category => self.category.as_deref(),
            FilterKey::Goal => self.goal.as_deref(),
            FilterKey::Activity => self.activity.as_deref(),
        }
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Active `(key, value)` pairs, in dimension order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::ALL
            .into_iter()
            .filter_map(move |k| self.get(k).map(|v| (k, v)))
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::Category => &mut self.category,
            FilterKey::Goal => &mut self.goal,
            FilterKey::Activity => &mut self.activity,
        }
    }
}

/// User intent against the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Select `value` on `key`, or deselect it if it is already the active value.
    Toggle { key: FilterKey, value: Option<String> },
    /// Clear every dimension at once.
    Reset,
}

impl FilterAction {
    /// Toggle action; an empty value is treated as `None`.
    pub fn toggle(key: FilterKey, value: impl Into<String>) -> Self {
        let value = value.into();
        FilterAction::Toggle {
            key,
            value: (!value.is_empty()).then_some(value),
        }
    }
}

impl FromStr for FilterAction {
    type Err = DomainError;

    /// Parses `reset`, `key=value` or a bare `key` (toggle with no value).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "reset" {
            return Ok(FilterAction::Reset);
        }
        match s.split_once('=') {
            Some((key, value)) => Ok(FilterAction::toggle(key.trim().parse()?, value.trim())),
            None => Ok(FilterAction::Toggle {
                key: s.parse()?,
                value: None,
            }),
        }
    }
}

impl Reducer for FilterState {
    type Action = FilterAction;

    fn reduce(&self, action: &FilterAction) -> Self {
        match action {
            FilterAction::Reset => FilterState::new(),
            FilterAction::Toggle { key, value } => {
                let mut next = self.clone();
                let slot = next.slot_mut(*key);
                if slot.as_deref() == value.as_deref() {
                    *slot = None;
                } else {
                    *slot = value.clone();
                }
                next
            }
        }
    }
}

/// Whether `product` satisfies every active filter.
pub fn matches(product: &Product, filters: &FilterState) -> bool {
    filters
        .active()
        .all(|(key, value)| key.product_value(product) == Some(value))
}

/// Products matching `filters`, in catalog order.
pub fn apply_filters<'a>(catalog: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    catalog.iter().filter(|p| matches(p, filters)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplestore_catalog::{Category, Goal, Price, ProductId};

    fn product(id: u32, category: Category) -> Product {
        Product::new(ProductId(id), format!("p{id}"), Price::from_cents(1_000)).with_category(category)
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn empty_filters_return_full_catalog() {
        let catalog = vec![
            product(1, Category::Vitaminas),
            product(2, Category::Proteinas),
            product(3, Category::Creatinas),
        ];
        assert_eq!(ids(&apply_filters(&catalog, &FilterState::new())), [1, 2, 3]);
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let catalog = vec![
            product(1, Category::Proteinas),
            product(2, Category::Proteinas),
            product(3, Category::Vitaminas),
            product(4, Category::Creatinas),
        ];
        let filters = FilterState::new().with(FilterKey::Category, "proteinas");
        assert_eq!(ids(&apply_filters(&catalog, &filters)), [1, 2]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let catalog = vec![
            product(1, Category::Vitaminas).with_goal(Goal::Health),
            product(2, Category::PreEntreno).with_goal(Goal::Energy),
        ];
        let filters = FilterState::new()
            .with(FilterKey::Category, "vitaminas")
            .with(FilterKey::Goal, "energy");
        assert!(apply_filters(&catalog, &filters).is_empty());
    }

    #[test]
    fn untagged_products_never_match_an_active_dimension() {
        let catalog = vec![Product::new(ProductId(1), "sin etiqueta", Price::from_cents(1))];
        let filters = FilterState::new().with(FilterKey::Activity, "gym");
        assert!(apply_filters(&catalog, &filters).is_empty());
    }

    #[test]
    fn unknown_values_match_nothing() {
        let catalog = vec![product(1, Category::Proteinas)];
        let filters = FilterState::new().with(FilterKey::Category, "batidos");
        assert!(apply_filters(&catalog, &filters).is_empty());
    }

    #[test]
    fn toggle_sets_then_clears() {
        let start = FilterState::new().with(FilterKey::Goal, "muscle");
        let action = FilterAction::toggle(FilterKey::Category, "proteinas");

        let once = start.reduce(&action);
        assert_eq!(once.category.as_deref(), Some("proteinas"));
        assert_eq!(once.goal.as_deref(), Some("muscle"));

        let twice = once.reduce(&action);
        assert_eq!(twice, start);
    }

    #[test]
    fn toggle_with_different_value_replaces() {
        let start = FilterState::new().with(FilterKey::Category, "proteinas");
        let next = start.reduce(&FilterAction::toggle(FilterKey::Category, "creatinas"));
        assert_eq!(next.category.as_deref(), Some("creatinas"));
    }

    #[test]
    fn toggle_with_no_value_clears() {
        let start = FilterState::new().with(FilterKey::Activity, "running");
        let next = start.reduce(&FilterAction::Toggle {
            key: FilterKey::Activity,
            value: None,
        });
        assert!(next.is_empty());
        // Clearing an already-empty dimension stays empty.
        assert!(next.reduce(&FilterAction::toggle(FilterKey::Activity, "")).is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let start = FilterState::new()
            .with(FilterKey::Category, "vitaminas")
            .with(FilterKey::Goal, "health")
            .with(FilterKey::Activity, "gym");
        assert_eq!(start.reduce(&FilterAction::Reset), FilterState::new());
    }

    #[test]
    fn parses_actions() {
        assert_eq!("reset".parse::<FilterAction>().unwrap(), FilterAction::Reset);
        assert_eq!(
            "goal=energy".parse::<FilterAction>().unwrap(),
            FilterAction::toggle(FilterKey::Goal, "energy")
        );
        assert_eq!(
            "activity".parse::<FilterAction>().unwrap(),
            FilterAction::Toggle {
                key: FilterKey::Activity,
                value: None
            }
        );
        assert!("price=10".parse::<FilterAction>().is_err());
    }

    #[test]
    fn active_lists_in_dimension_order() {
        let filters = FilterState::new()
            .with(FilterKey::Activity, "gym")
            .with(FilterKey::Category, "proteinas");
        let active: Vec<_> = filters.active().collect();
        assert_eq!(
            active,
            [(FilterKey::Category, "proteinas"), (FilterKey::Activity, "gym")]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use supplestore_catalog::Activity;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                any::<u32>(),
                prop::option::of(prop::sample::select(Category::ALL)),
                prop::option::of(prop::sample::select(Goal::ALL)),
                prop::option::of(prop::sample::select(Activity::ALL)),
            )
                .prop_map(|(id, category, goal, activity)| {
                    let mut p = Product::new(ProductId(id), "p", Price::from_cents(100));
                    p.category = category;
                    p.goal = goal;
                    p.activity = activity;
                    p
                })
        }

        fn arb_value(known: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
            let mut values: Vec<&'static str> = known.to_vec();
            values.push("desconocido");
            prop::option::of(prop::sample::select(values).prop_map(str::to_string))
        }

        fn arb_filters() -> impl Strategy<Value = FilterState> {
            (
                arb_value(&["proteinas", "vitaminas", "creatinas", "pre-entreno"]),
                arb_value(&["muscle", "energy", "health"]),
                arb_value(&["gym", "running", "crossfit"]),
            )
                .prop_map(|(category, goal, activity)| FilterState {
                    category,
                    goal,
                    activity,
                })
        }

        fn arb_action() -> impl Strategy<Value = FilterAction> {
            prop_oneof![
                Just(FilterAction::Reset),
                (prop::sample::select(FilterKey::ALL.to_vec()), arb_value(&["proteinas", "gym", "energy"]))
                    .prop_map(|(key, value)| FilterAction::Toggle { key, value }),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a product is kept iff every non-null filter equals its tag.
            #[test]
            fn membership_matches_predicate(
                catalog in prop::collection::vec(arb_product(), 0..40),
                filters in arb_filters(),
            ) {
                let filtered = apply_filters(&catalog, &filters);
                let expected: Vec<&Product> = catalog
                    .iter()
                    .filter(|p| {
                        FilterKey::ALL.iter().all(|k| match filters.get(*k) {
                            None => true,
                            Some(v) => k.product_value(p) == Some(v),
                        })
                    })
                    .collect();
                prop_assert_eq!(filtered, expected);
            }

            /// Property: filtering with no active filters is the identity.
            #[test]
            fn empty_filters_are_identity(catalog in prop::collection::vec(arb_product(), 0..40)) {
                let filtered = apply_filters(&catalog, &FilterState::new());
                prop_assert_eq!(filtered.len(), catalog.len());
                prop_assert!(filtered.iter().zip(catalog.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
            }

            /// Property: toggling the same value twice restores the original state.
            #[test]
            fn toggle_twice_is_identity(
                start in arb_filters(),
                key in prop::sample::select(FilterKey::ALL.to_vec()),
                value in "[a-z_-]{1,12}",
            ) {
                let cleared = start.reduce(&FilterAction::Toggle { key, value: None });
                let action = FilterAction::toggle(key, value);

                let once = cleared.reduce(&action);
                prop_assert_eq!(once.reduce(&action), cleared);

                // Starting from the active value: clear, then set back.
                prop_assert_eq!(once.reduce(&action).reduce(&action), once);
            }

            /// Property: reset always yields the empty state.
            #[test]
            fn reset_always_empties(start in arb_filters()) {
                prop_assert_eq!(start.reduce(&FilterAction::Reset), FilterState::new());
            }

            /// Property: toggles only ever touch their own dimension.
            #[test]
            fn toggle_leaves_other_dimensions(
                start in arb_filters(),
                actions in prop::collection::vec(arb_action(), 1..10),
            ) {
                let end = start.reduce_all(&actions);
                for key in FilterKey::ALL {
                    let touched = actions.iter().any(|a| match a {
                        FilterAction::Reset => true,
                        FilterAction::Toggle { key: k, .. } => *k == key,
                    });
                    if !touched {
                        prop_assert_eq!(end.get(key), start.get(key));
                    }
                }
            }
        }
    }
}
