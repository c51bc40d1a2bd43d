//! Derived view selectors
//!
//! Pure functions projecting a collection through the current search term and
//! filter set. Nothing here allocates beyond the returned vector, so a view can
//! call them on every render.

use crate::core::entity::Data;
use crate::core::query::Filters;

/// Trait for stores exposing a filtered projection of their collection
pub trait FilteredView<T: Data> {
    /// Records matching the current search term and filters, in input order
    fn filtered_items(&self) -> Vec<T>;
}

/// Apply search and filters to a collection
///
/// A record is kept when it matches the search term on at least one of the
/// entity's indexed fields AND every active filter on a declared filter key.
/// Filter keys the entity does not declare are ignored.
pub fn select_filtered<'a, T: Data>(
    items: &'a [T],
    search_term: &str,
    filters: &Filters,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(*item, &needle) && matches_filters(*item, filters))
        .collect()
}

/// Case-insensitive substring search; `needle` must already be lowercase
pub fn matches_search<T: Data>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    T::indexed_fields().iter().any(|field| {
        item.field_value(field)
            .is_some_and(|value| value.contains_lowercase(needle))
    })
}

/// Exact-match on every active, declared filter key
pub fn matches_filters<T: Data>(item: &T, filters: &Filters) -> bool {
    filters
        .active()
        .filter(|(key, _)| T::filter_fields().contains(key))
        .all(|(key, expected)| {
            item.field_value(key)
                .is_some_and(|value| value.equals_text(expected))
        })
}
