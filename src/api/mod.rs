//! Catalog REST API: the collaborator that serves products and categories.
//!
//! DESIGN
//! ======
//! `CatalogApi` is the seam between the reconciliation logic and the network.
//! Services only see the trait, so tests drive them with in-memory fakes and
//! `http::HttpCatalogApi` is the production implementation.

pub mod http;

use catalog::{Category, CategoryId, FacetOption, Product, ProductFilter, serialize_query_string};

pub const PRODUCTS_PATH: &str = "/productos";
pub const FILTERED_PRODUCTS_PATH: &str = "/productos/filtrar";
pub const CATEGORIES_PATH: &str = "/categorias";
pub const COLORS_PATH: &str = "/colores";
pub const SIZES_PATH: &str = "/talles";

/// Errors produced by catalog API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Response { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Read-only catalog endpoints used by the storefront.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Full, unfiltered product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Products matching `filter`.
    async fn fetch_filtered_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError>;

    /// Top-level categories.
    async fn fetch_root_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Direct children of `parent_id`.
    async fn fetch_subcategories(&self, parent_id: CategoryId) -> Result<Vec<Category>, ApiError>;

    async fn fetch_colors(&self) -> Result<Vec<FacetOption>, ApiError>;

    async fn fetch_sizes(&self) -> Result<Vec<FacetOption>, ApiError>;
}

/// Path of the filter endpoint, with the filter encoded as its query string.
#[must_use]
pub fn filtered_products_path(filter: &ProductFilter) -> String {
    let query = serialize_query_string(filter);
    if query.is_empty() {
        FILTERED_PRODUCTS_PATH.to_owned()
    } else {
        format!("{FILTERED_PRODUCTS_PATH}?{query}")
    }
}

/// Path listing the children of one category.
#[must_use]
pub fn subcategories_path(parent_id: CategoryId) -> String {
    format!("{CATEGORIES_PATH}/{parent_id}/subcategorias")
}

/// Children of `parent` (`None` for the root level).
///
/// # Errors
///
/// Propagates the API error of the underlying call.
pub async fn fetch_children(api: &dyn CatalogApi, parent: Option<CategoryId>) -> Result<Vec<Category>, ApiError> {
    match parent {
        Some(id) => api.fetch_subcategories(id).await,
        None => api.fetch_root_categories().await,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
