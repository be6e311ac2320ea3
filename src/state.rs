//! Shared storefront state.
//!
//! DESIGN
//! ======
//! `AppState` is the one context object the services operate on. It is
//! created once at startup and passed explicitly; nothing lives in a global.
//! Each store sits behind its own lock and is only ever held for a
//! synchronous state transition, never across a network call.

use std::sync::Arc;

use catalog::{CatalogStore, CategoryTree, FacetOptions};
use tokio::sync::RwLock;

use crate::api::CatalogApi;

/// Shared application state. Clone is cheap: all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CatalogApi>,
    pub catalog: Arc<RwLock<CatalogStore>>,
    pub categories: Arc<RwLock<CategoryTree>>,
    pub facets: Arc<RwLock<FacetOptions>>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            catalog: Arc::new(RwLock::new(CatalogStore::default())),
            categories: Arc::new(RwLock::new(CategoryTree::default())),
            facets: Arc::new(RwLock::new(FacetOptions::default())),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use catalog::{Category, CategoryId, FacetOption, Product, ProductFilter};

    use super::*;
    use crate::api::ApiError;

    /// In-memory catalog with call counters and optional per-call delays.
    #[derive(Default)]
    pub struct MockApi {
        pub products: Vec<Product>,
        pub roots: Vec<Category>,
        pub children: HashMap<CategoryId, Vec<Category>>,
        pub colors: Vec<FacetOption>,
        pub sizes: Vec<FacetOption>,
        /// Subcategory ids whose fetch fails with a 500.
        pub failing: Vec<CategoryId>,
        /// When set, every product call fails with this status.
        pub product_status: Option<u16>,
        /// Delay applied to filtered calls whose filter has this many categories.
        pub delays: Mutex<HashMap<usize, Duration>>,
        pub full_calls: AtomicUsize,
        pub filtered_calls: AtomicUsize,
        pub subcategory_calls: AtomicUsize,
    }

    impl MockApi {
        pub fn calls(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }

        fn product_error(&self) -> Option<ApiError> {
            self.product_status
                .map(|status| ApiError::Response { status, body: String::new() })
        }
    }

    #[async_trait::async_trait]
    impl CatalogApi for MockApi {
        async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
            self.full_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.product_error() {
                return Err(err);
            }
            Ok(self.products.clone())
        }

        async fn fetch_filtered_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
            self.filtered_calls.fetch_add(1, Ordering::SeqCst);
            let delay = self
                .delays
                .lock()
                .unwrap()
                .get(&filter.categories.len())
                .copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(err) = self.product_error() {
                return Err(err);
            }
            Ok(self
                .products
                .iter()
                .filter(|p| {
                    filter.categories.is_empty()
                        || p.category
                            .as_ref()
                            .is_some_and(|c| filter.categories.contains(c))
                })
                .cloned()
                .collect())
        }

        async fn fetch_root_categories(&self) -> Result<Vec<Category>, ApiError> {
            Ok(self.roots.clone())
        }

        async fn fetch_subcategories(&self, parent_id: CategoryId) -> Result<Vec<Category>, ApiError> {
            self.subcategory_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(&parent_id) {
                return Err(ApiError::Response { status: 500, body: String::new() });
            }
            Ok(self.children.get(&parent_id).cloned().unwrap_or_default())
        }

        async fn fetch_colors(&self) -> Result<Vec<FacetOption>, ApiError> {
            Ok(self.colors.clone())
        }

        async fn fetch_sizes(&self) -> Result<Vec<FacetOption>, ApiError> {
            Ok(self.sizes.clone())
        }
    }

    pub fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            denomination: name.to_owned(),
            sale_price: 1000.0,
            category: Some(category.to_owned()),
            color: None,
            size: None,
            sex: None,
            has_promotion: false,
            promotional_price: None,
            image_url: None,
        }
    }

    pub fn category(id: CategoryId, name: &str, parent_id: Option<CategoryId>) -> Category {
        Category { id, denomination: name.to_owned(), parent_id }
    }

    pub fn option(id: i64, name: &str) -> FacetOption {
        FacetOption { id, denomination: name.to_owned() }
    }

    /// Catalog with two products and a two-level category tree:
    /// Ropa(1) -> Remeras(10) -> Musculosas(100), and Calzado(2).
    pub fn seeded_api() -> MockApi {
        let mut children = HashMap::new();
        children.insert(1, vec![category(10, "Remeras", Some(1))]);
        children.insert(10, vec![category(100, "Musculosas", Some(10))]);
        MockApi {
            products: vec![product(1, "Zapatilla", "Calzado"), product(2, "Remera lisa", "Remeras")],
            roots: vec![category(1, "Ropa", None), category(2, "Calzado", None)],
            children,
            colors: vec![option(1, "rojo")],
            sizes: vec![option(1, "M"), option(2, "L")],
            ..Default::default()
        }
    }

    /// `AppState` backed by `api`; the `Arc` is returned for call-count assertions.
    pub fn test_app_state(api: MockApi) -> (AppState, Arc<MockApi>) {
        let api = Arc::new(api);
        (AppState::new(api.clone()), api)
    }
}
