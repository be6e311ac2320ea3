//! REST API helpers for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the catalog is only
//! fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as display strings. The catalog store keeps them
//! verbatim for the page to show; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{Category, CategoryId, FacetOptions, FetchTicket, Product};

/// Prefix under which the backend is proxied to the browser.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(ticket: &FetchTicket) -> String {
    if ticket.wants_full_list() {
        format!("{API_BASE}/productos")
    } else {
        let query = catalog::serialize_query_string(&ticket.filter);
        format!("{API_BASE}/productos/filtrar?{query}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn children_endpoint(parent: Option<CategoryId>) -> String {
    match parent {
        Some(id) => format!("{API_BASE}/categorias/{id}/subcategorias"),
        None => format!("{API_BASE}/categorias"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn facet_endpoint(name: &str) -> String {
    format!("{API_BASE}/{name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    log::debug!("GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the products a ticket asks for: the full list for an empty filter,
/// the filter endpoint otherwise.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be decoded.
pub async fn fetch_products(ticket: &FetchTicket) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&products_endpoint(ticket)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
        Err("not available on server".to_owned())
    }
}

/// Fetch the children of `parent`, or the root categories for `None`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body cannot be decoded.
pub async fn fetch_children(parent: Option<CategoryId>) -> Result<Vec<Category>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&children_endpoint(parent)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = parent;
        Err("not available on server".to_owned())
    }
}

/// Fetch the filter panel options (root categories, colors, sizes) concurrently.
///
/// # Errors
///
/// Returns the first error string among the three requests.
pub async fn fetch_facets() -> Result<FacetOptions, String> {
    #[cfg(feature = "hydrate")]
    {
        let colors_url = facet_endpoint("colores");
        let sizes_url = facet_endpoint("talles");
        let (categories, colors, sizes) = futures::join!(
            fetch_children(None),
            get_json::<Vec<catalog::FacetOption>>(&colors_url),
            get_json::<Vec<catalog::FacetOption>>(&sizes_url),
        );
        Ok(FacetOptions { categories: categories?, colors: colors?, sizes: sizes? })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
