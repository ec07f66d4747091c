//! Filter sidebar model: every option of every dimension, with its active flag.

use serde::Serialize;

use supplestore_catalog::{Activity, Category, Goal};

use crate::filter::{FilterKey, FilterState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub key: FilterKey,
    pub title: &'static str,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub groups: Vec<FilterGroup>,
    /// Whether the "clear filters" control should be offered.
    pub has_active_filters: bool,
}

fn group_title(key: FilterKey) -> &'static str {
    match key {
        FilterKey::Category => "Categorías",
        FilterKey::Goal => "Objetivo",
        FilterKey::Activity => "Actividad",
    }
}

fn options(key: FilterKey) -> Vec<(&'static str, &'static str)> {
    match key {
        FilterKey::Category => Category::ALL.iter().map(|c| (c.as_str(), c.label())).collect(),
        FilterKey::Goal => Goal::ALL.iter().map(|g| (g.as_str(), g.label())).collect(),
        FilterKey::Activity => Activity::ALL.iter().map(|a| (a.as_str(), a.label())).collect(),
    }
}

pub fn sidebar(filters: &FilterState) -> Sidebar {
    let groups = FilterKey::ALL
        .into_iter()
        .map(|key| FilterGroup {
            key,
            title: group_title(key),
            options: options(key)
                .into_iter()
                .map(|(value, label)| FilterOption {
                    value,
                    label,
                    active: filters.get(key) == Some(value),
                })
                .collect(),
        })
        .collect();

    Sidebar {
        groups,
        has_active_filters: !filters.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_option() {
        let bar = sidebar(&FilterState::new());
        let sizes: Vec<usize> = bar.groups.iter().map(|g| g.options.len()).collect();
        assert_eq!(sizes, [7, 6, 6]);
        assert!(!bar.has_active_filters);
        assert!(bar.groups.iter().flat_map(|g| &g.options).all(|o| !o.active));
    }

    #[test]
    fn marks_active_options() {
        let filters = FilterState::new()
            .with(FilterKey::Category, "vitaminas")
            .with(FilterKey::Activity, "swimming");
        let bar = sidebar(&filters);

        let active: Vec<(FilterKey, &str)> = bar
            .groups
            .iter()
            .flat_map(|g| g.options.iter().filter(|o| o.active).map(move |o| (g.key, o.value)))
            .collect();
        assert_eq!(
            active,
            [(FilterKey::Category, "vitaminas"), (FilterKey::Activity, "swimming")]
        );
        assert!(bar.has_active_filters);
    }

    #[test]
    fn unknown_value_marks_nothing_but_still_counts_as_active() {
        let bar = sidebar(&FilterState::new().with(FilterKey::Goal, "bulk"));
        assert!(bar.groups.iter().flat_map(|g| &g.options).all(|o| !o.active));
        assert!(bar.has_active_filters);
    }
}
