//! Catalog store: the current filter and the product list fetched for it.
//!
//! DESIGN
//! ======
//! The store owns one logical "current filter". Every fetch is described by a
//! [`FetchTicket`] carrying a monotonically increasing request token. When a
//! response arrives the caller hands the token back and the store applies it
//! only if no newer fetch has started since, so a slow response for an old
//! filter can never overwrite results for the latest one.
//!
//! Fields are private: state changes only through whole-value replacement in
//! the methods below.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::filter::ProductFilter;
use crate::reconcile::{ReconcileAction, reconcile};
use crate::types::Product;

/// Monotonically increasing fetch identifier.
pub type RequestToken = u64;

/// A fetch the caller must perform and report back with [`CatalogStore::complete_fetch`].
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub filter: ProductFilter,
}

impl FetchTicket {
    /// Empty filters are served by the full-list endpoint.
    #[must_use]
    pub fn wants_full_list(&self) -> bool {
        self.filter.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    filter: ProductFilter,
    /// `None` until a response has been received for the current state.
    products: Option<Vec<Product>>,
    loading: bool,
    error: Option<String>,
    latest_token: RequestToken,
}

impl CatalogStore {
    #[must_use]
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once a result set has been received, even an empty one, so an
    /// empty catalog is not re-fetched on every URL event.
    #[must_use]
    pub fn has_results(&self) -> bool {
        self.products.is_some()
    }

    /// Token of the most recently issued fetch (0 before the first one).
    #[must_use]
    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    /// Run the reconciliation table for `url_filter` against this store.
    #[must_use]
    pub fn reconcile_url(&self, url_filter: &ProductFilter) -> ReconcileAction {
        reconcile(url_filter, &self.filter, self.has_results(), self.loading, self.error.is_some())
    }

    /// Apply a reconcile decision, returning the fetch to perform if any.
    pub fn apply(&mut self, action: &ReconcileAction) -> Option<FetchTicket> {
        match action {
            ReconcileAction::ReplaceAndFetch(filter) => Some(self.begin_fetch(filter.clone())),
            ReconcileAction::FetchAll => Some(self.begin_fetch(ProductFilter::default())),
            ReconcileAction::Noop => None,
        }
    }

    /// Replace the current filter and start a fetch for it.
    pub fn begin_fetch(&mut self, filter: ProductFilter) -> FetchTicket {
        self.latest_token += 1;
        self.filter = filter.normalize();
        self.loading = true;
        self.error = None;
        FetchTicket { token: self.latest_token, filter: self.filter.clone() }
    }

    /// Re-fetch the current filter. This is the only retry path.
    pub fn retry(&mut self) -> FetchTicket {
        let filter = self.filter.clone();
        self.begin_fetch(filter)
    }

    /// Record the outcome of the fetch identified by `token`.
    ///
    /// Returns `false` and leaves the store untouched when a newer fetch has
    /// been started since. Errors clear the product list and keep the
    /// message verbatim for display.
    pub fn complete_fetch(&mut self, token: RequestToken, result: Result<Vec<Product>, String>) -> bool {
        if token != self.latest_token || !self.loading {
            tracing::debug!(token, latest = self.latest_token, "discarding stale product response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = Some(products);
                self.error = None;
            }
            Err(message) => {
                self.products = None;
                self.error = Some(message);
            }
        }
        true
    }

    /// Return to the initial state. Token numbering continues so responses to
    /// fetches issued before the reset are still discarded.
    pub fn reset(&mut self) {
        *self = Self { latest_token: self.latest_token, ..Self::default() };
    }
}
