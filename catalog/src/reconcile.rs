//! Filter reconciliation between the URL and the catalog store.
//!
//! DESIGN
//! ======
//! The URL is the source of truth. On every URL change the caller parses the
//! query string and asks [`reconcile`] what to do with the store. The decision
//! table is evaluated top to bottom and the first match wins:
//!
//! 1. URL and store filters differ: replace the store filter, fetch filtered.
//! 2. URL filter is empty and the store is idle with no results and no error:
//!    fetch the full product list (first load).
//! 3. Otherwise: nothing to do.
//!
//! The equality check runs first so a filtered URL on first paint is never
//! overwritten by an unfiltered fetch.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::filter::ProductFilter;

/// What the caller must do after reconciling a URL filter against the store.
#[derive(Clone, Debug, PartialEq)]
pub enum ReconcileAction {
    /// Replace the store filter with this (normalized) URL filter and fetch filtered results.
    ReplaceAndFetch(ProductFilter),
    /// Fetch the unfiltered product list.
    FetchAll,
    /// The store already reflects the URL.
    Noop,
}

/// Canonical form of `filter`. See [`ProductFilter::normalize`].
#[must_use]
pub fn normalize(filter: &ProductFilter) -> ProductFilter {
    filter.normalize()
}

/// True iff both filters describe the same constraint set.
#[must_use]
pub fn are_equal(a: &ProductFilter, b: &ProductFilter) -> bool {
    a.normalize() == b.normalize()
}

/// Decide whether the store must change and which fetch to issue.
#[must_use]
pub fn reconcile(
    url_filter: &ProductFilter,
    store_filter: &ProductFilter,
    has_results: bool,
    is_loading: bool,
    has_error: bool,
) -> ReconcileAction {
    let url_filter = url_filter.normalize();
    if url_filter != store_filter.normalize() {
        return ReconcileAction::ReplaceAndFetch(url_filter);
    }
    if url_filter.is_empty() && !has_results && !is_loading && !has_error {
        return ReconcileAction::FetchAll;
    }
    ReconcileAction::Noop
}
