//! `reqwest` implementation of [`CatalogApi`].

use std::time::Duration;

use catalog::{Category, CategoryId, FacetOption, Product, ProductFilter};
use serde::de::DeserializeOwned;

use super::{
    ApiError, CATEGORIES_PATH, COLORS_PATH, CatalogApi, PRODUCTS_PATH, SIZES_PATH, filtered_products_path,
    subcategories_path,
};
use crate::config::StorefrontConfig;

pub struct HttpCatalogApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Build a client for `config.api_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Response { status, body: text });
        }
        decode_body(&text)
    }
}

pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(PRODUCTS_PATH).await
    }

    async fn fetch_filtered_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.get_json(&filtered_products_path(filter)).await
    }

    async fn fetch_root_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    async fn fetch_subcategories(&self, parent_id: CategoryId) -> Result<Vec<Category>, ApiError> {
        self.get_json(&subcategories_path(parent_id)).await
    }

    async fn fetch_colors(&self) -> Result<Vec<FacetOption>, ApiError> {
        self.get_json(COLORS_PATH).await
    }

    async fn fetch_sizes(&self) -> Result<Vec<FacetOption>, ApiError> {
        self.get_json(SIZES_PATH).await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
