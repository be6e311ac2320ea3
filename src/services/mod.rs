//! Storefront services driven by the CLI.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the async plumbing: they take the state locks only for
//! synchronous transitions of the `catalog` stores and talk to the backend
//! through the `CatalogApi` seam on `AppState`.

pub mod categories;
pub mod facets;
pub mod products;
