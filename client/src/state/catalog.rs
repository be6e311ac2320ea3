//! Catalog page state: the reconciled product store plus the filter panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router's query string is the source of truth. The page feeds every
//! location change into `sync_location`; submitting the panel produces a new
//! location search which the page writes with a history replace, which in
//! turn comes back through `sync_location`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use catalog::{
    CatalogStore, FacetOptions, FetchTicket, FilterDraft, Product, ReconcileAction, RequestToken, location_search,
    parse_query_string,
};

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub store: CatalogStore,
    pub draft: FilterDraft,
    /// Validation message from the last rejected panel submission.
    pub draft_error: Option<String>,
    pub facets: FacetOptions,
    pub facets_error: Option<String>,
}

impl CatalogState {
    /// Reconcile the store against the current `location.search`.
    ///
    /// Returns the fetch to run, if the URL calls for one. When the URL
    /// carries a different filter the panel draft is reseeded from it.
    pub fn sync_location(&mut self, search: &str) -> Option<FetchTicket> {
        let url_filter = parse_query_string(search);
        let action = self.store.reconcile_url(&url_filter);
        if let ReconcileAction::ReplaceAndFetch(filter) = &action {
            self.draft = FilterDraft::from_filter(filter);
            self.draft_error = None;
        }
        self.store.apply(&action)
    }

    /// Drop the loaded products and reconcile `search` from scratch, which
    /// always issues a new fetch. A response still in flight is discarded.
    pub fn refresh(&mut self, search: &str) -> Option<FetchTicket> {
        self.store.reset();
        self.sync_location(search)
    }

    /// Hand a fetch outcome back to the store. Stale tokens are ignored.
    pub fn finish_fetch(&mut self, token: RequestToken, result: Result<Vec<Product>, String>) -> bool {
        self.store.complete_fetch(token, result)
    }

    /// Validate the draft and return the location search to navigate to.
    pub fn submit_draft(&mut self) -> Option<String> {
        match self.draft.submit() {
            Ok(filter) => {
                self.draft_error = None;
                Some(location_search(&filter))
            }
            Err(e) => {
                self.draft_error = Some(e.to_string());
                None
            }
        }
    }

    /// Reset the draft; the caller navigates to the returned (empty) search.
    pub fn clear_filters(&mut self) -> String {
        self.draft.clear();
        self.draft_error = None;
        String::new()
    }

    /// True when the panel holds edits not yet applied.
    pub fn has_pending_edits(&self) -> bool {
        self.draft.differs_from(self.store.filter())
    }

    pub fn set_facets(&mut self, result: Result<FacetOptions, String>) {
        match result {
            Ok(options) => {
                self.facets = options;
                self.facets_error = None;
            }
            Err(e) => self.facets_error = Some(e),
        }
    }
}
