//! Client-side pagination over the filtered list.
//!
//! [`paginate`] never clamps the requested page; bounds are enforced by the
//! navigation side ([`go_to_page`] / [`PaginationState`]).

use serde::Serialize;

/// Products shown per grid page.
pub const PRODUCTS_PER_PAGE: usize = 6;

/// `ceil(len / per_page)`; zero for an empty list or a zero page size.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// One page of a list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Slice `items` for `current_page` (1-based).
///
/// Out-of-range pages (including page 0) produce an empty slice, not an error.
pub fn paginate<T>(items: &[T], current_page: usize, per_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), per_page);
    let empty = Page {
        items: &items[..0],
        total_pages,
    };

    if current_page == 0 || per_page == 0 {
        return empty;
    }

    let start = (current_page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return empty;
    }
    let end = start.saturating_add(per_page).min(items.len());

    Page {
        items: &items[start..end],
        total_pages,
    }
}

/// Page to show after a navigation request.
///
/// Returns `current` unchanged when `requested` is below 1, above
/// `total_pages`, or when there is at most one page.
pub fn go_to_page(current: usize, requested: i64, total_pages: usize) -> usize {
    if total_pages <= 1 || requested < 1 {
        return current;
    }
    match usize::try_from(requested) {
        Ok(page) if page <= total_pages => page,
        _ => current,
    }
}

/// Current page of the grid. Starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: usize,
    per_page: usize,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::with_per_page(PRODUCTS_PER_PAGE)
    }

    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            current_page: 1,
            per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Navigate to `requested` if it is within `[1, total_pages]`.
    ///
    /// Returns the (possibly unchanged) current page.
    pub fn go_to(&mut self, requested: i64, total_pages: usize) -> usize {
        self.current_page = go_to_page(self.current_page, requested, total_pages);
        self.current_page
    }

    pub fn next(&mut self, total_pages: usize) -> usize {
        let requested = i64::try_from(self.current_page).unwrap_or(i64::MAX).saturating_add(1);
        self.go_to(requested, total_pages)
    }

    pub fn previous(&mut self, total_pages: usize) -> usize {
        let requested = i64::try_from(self.current_page).unwrap_or(i64::MAX) - 1;
        self.go_to(requested, total_pages)
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current_page, self.per_page)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn thirteen_items_make_three_pages() {
        let items = list(13);
        let page = paginate(&items, 3, PRODUCTS_PER_PAGE);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[12]);

        let first = paginate(&items, 1, PRODUCTS_PER_PAGE);
        assert_eq!(first.items, &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, PRODUCTS_PER_PAGE);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty_not_clamped() {
        let items = list(7);
        assert!(paginate(&items, 0, 6).items.is_empty());
        assert!(paginate(&items, 3, 6).items.is_empty());
        assert!(paginate(&items, usize::MAX, 6).items.is_empty());
        assert_eq!(paginate(&items, 3, 6).total_pages, 2);
    }

    #[test]
    fn zero_page_size_is_total() {
        let items = list(4);
        let page = paginate(&items, 1, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn go_to_page_ignores_out_of_bounds() {
        assert_eq!(go_to_page(2, 0, 3), 2);
        assert_eq!(go_to_page(2, -4, 3), 2);
        assert_eq!(go_to_page(2, 4, 3), 2);
        assert_eq!(go_to_page(2, 3, 3), 3);
        assert_eq!(go_to_page(2, 1, 3), 1);
    }

    #[test]
    fn go_to_page_is_noop_with_a_single_page() {
        assert_eq!(go_to_page(1, 1, 1), 1);
        assert_eq!(go_to_page(1, 1, 0), 1);
    }

    #[test]
    fn state_navigation() {
        let mut state = PaginationState::new();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.previous(3), 1);
        assert_eq!(state.next(3), 2);
        assert_eq!(state.next(3), 3);
        assert_eq!(state.next(3), 3);
        assert_eq!(state.go_to(1, 3), 1);
        state.go_to(3, 3);
        state.reset();
        assert_eq!(state.current_page(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: pages partition the list, in order, without overlap.
            #[test]
            fn pages_partition_the_list(len in 0usize..200, per_page in 1usize..20) {
                let items = list(len);
                let total = total_pages(len, per_page);

                let mut joined = Vec::with_capacity(len);
                for page in 1..=total {
                    let slice = paginate(&items, page, per_page);
                    prop_assert!(!slice.items.is_empty());
                    prop_assert!(slice.items.len() <= per_page);
                    joined.extend_from_slice(slice.items);
                }
                prop_assert_eq!(joined, items.clone());
                prop_assert!(paginate(&items, total + 1, per_page).items.is_empty());
            }

            /// Property: navigation never leaves [1, total_pages] and ignores bad requests.
            #[test]
            fn go_to_page_stays_in_bounds(
                current in 1usize..10,
                requested in -20i64..40,
                total in 0usize..30,
            ) {
                let next = go_to_page(current, requested, total);
                if requested < 1 || requested as usize > total || total <= 1 {
                    prop_assert_eq!(next, current);
                } else {
                    prop_assert_eq!(next, requested as usize);
                }
            }
        }
    }
}
