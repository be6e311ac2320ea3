//! Product filtering and catalog state for the storefront.
//!
//! This crate is UI-framework agnostic so both the native `storefront` driver
//! and the Leptos `client` consume the same reconciliation rules. Nothing in
//! here performs I/O: fetches are described as tickets, executed by the
//! caller, and fed back through the stores.

pub mod category_tree;
pub mod draft;
pub mod filter;
pub mod query;
pub mod reconcile;
pub mod store;
pub mod types;

#[cfg(test)]
#[path = "test_strategies.rs"]
pub(crate) mod test_strategies;

pub use category_tree::{CategoryId, CategoryNode, CategoryTree, TreeRow};
pub use draft::{Facet, FilterDraft};
pub use filter::{FilterError, OrderBy, OrderDirection, ProductFilter, Sex};
pub use query::{location_search, parse_query_string, serialize_query_string};
pub use reconcile::{ReconcileAction, are_equal, normalize, reconcile};
pub use store::{CatalogStore, FetchTicket, RequestToken};
pub use types::{Category, FacetOption, FacetOptions, Product};
