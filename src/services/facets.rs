//! Facet service — option lists for the filter panel.
//!
//! The three lists are fetched concurrently and cached on first success.

use catalog::FacetOptions;
use tracing::info;

use crate::api::ApiError;
use crate::state::AppState;

/// Return the cached facet options, fetching them on first use.
///
/// # Errors
///
/// Returns the first API error; nothing is cached in that case.
pub async fn load_facets(state: &AppState) -> Result<FacetOptions, ApiError> {
    {
        let cached = state.facets.read().await;
        if cached.is_loaded() {
            return Ok(cached.clone());
        }
    }

    let (categories, colors, sizes) = tokio::join!(
        state.api.fetch_root_categories(),
        state.api.fetch_colors(),
        state.api.fetch_sizes(),
    );
    let options = FacetOptions { categories: categories?, colors: colors?, sizes: sizes? };
    info!(
        categories = options.categories.len(),
        colors = options.colors.len(),
        sizes = options.sizes.len(),
        "facet options loaded"
    );

    *state.facets.write().await = options.clone();
    Ok(options)
}

#[cfg(test)]
#[path = "facets_test.rs"]
mod tests;
