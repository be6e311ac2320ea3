//! Product service — URL-driven filtering of the product list.
//!
//! DESIGN
//! ======
//! The query string is the source of truth. `sync_from_query` parses it,
//! reconciles it against the catalog store, and performs at most one fetch.
//! Applying a new filter means producing its query string and syncing from
//! that, exactly as a browser would after a history replace.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and stored on the catalog as their display
//! string. Nothing here returns an error; callers read the store.

use catalog::{FetchTicket, ProductFilter, ReconcileAction, parse_query_string, serialize_query_string};
use tracing::{info, warn};

use crate::state::AppState;

/// Reconcile the store against `query` and run the fetch it calls for.
pub async fn sync_from_query(state: &AppState, query: &str) -> ReconcileAction {
    let url_filter = parse_query_string(query);
    let (action, ticket) = {
        let mut store = state.catalog.write().await;
        let action = store.reconcile_url(&url_filter);
        let ticket = store.apply(&action);
        (action, ticket)
    };

    if let Some(ticket) = ticket {
        run_fetch(state, ticket).await;
    }
    action
}

/// Make `filter` current: returns the canonical query string to write into
/// the location (by replace) and the action syncing from it produced.
pub async fn apply_filter(state: &AppState, filter: &ProductFilter) -> (String, ReconcileAction) {
    let query = serialize_query_string(filter);
    let action = sync_from_query(state, &query).await;
    (query, action)
}

/// Re-fetch the current filter after a failure.
pub async fn retry(state: &AppState) -> bool {
    let ticket = state.catalog.write().await.retry();
    run_fetch(state, ticket).await
}

/// Execute `ticket` and hand the outcome back to the store.
///
/// Returns whether the result was applied (false when superseded).
pub async fn run_fetch(state: &AppState, ticket: FetchTicket) -> bool {
    let token = ticket.token;
    let query = serialize_query_string(&ticket.filter);
    info!(token, %query, "fetching products");

    let result = if ticket.wants_full_list() {
        state.api.fetch_products().await
    } else {
        state.api.fetch_filtered_products(&ticket.filter).await
    };

    let result = match result {
        Ok(products) => {
            info!(token, count = products.len(), "products fetched");
            Ok(products)
        }
        Err(e) => {
            warn!(token, error = %e, "product fetch failed");
            Err(e.to_string())
        }
    };

    state.catalog.write().await.complete_fetch(token, result)
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
