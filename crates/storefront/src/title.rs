//! Grid heading derived from the active category.

use crate::filter::FilterState;

/// Heading shown when no category is selected.
pub const DEFAULT_TITLE: &str = "Todos los productos";

/// `pre-entreno` → `Pre entreno`; no category → [`DEFAULT_TITLE`].
pub fn display_title(filters: &FilterState) -> String {
    let Some(category) = filters.category.as_deref() else {
        return DEFAULT_TITLE.to_string();
    };

    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
            .collect(),
        None => DEFAULT_TITLE.to_string(),
    }
}
