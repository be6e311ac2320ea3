//! Category service — lazy, memoized subcategory loading.
//!
//! DESIGN
//! ======
//! Each parent key loads independently: the tree lock is taken only to issue
//! a token and to record the result, so any number of branches can be in
//! flight at once. `load_tree` is the plain recursive fetch: it walks the
//! hierarchy level by level, loading every branch of a level concurrently,
//! and returns the assembled tree.

use catalog::{CategoryId, CategoryNode, CategoryTree};
use futures::future::join_all;
use tracing::{info, warn};

use crate::api::fetch_children;
use crate::state::AppState;

/// Load the children of `parent` (`None` for the roots) unless cached.
///
/// Returns whether a fetch was performed and its result applied.
pub async fn load_children(state: &AppState, parent: Option<CategoryId>, force: bool) -> bool {
    let Some(token) = state.categories.write().await.begin_load(parent, force) else {
        return false;
    };

    let result = match fetch_children(state.api.as_ref(), parent).await {
        Ok(children) => {
            info!(?parent, count = children.len(), "categories loaded");
            Ok(children)
        }
        Err(e) => {
            warn!(?parent, error = %e, "category load failed");
            Err(e.to_string())
        }
    };

    state
        .categories
        .write()
        .await
        .complete_load(parent, token, result)
}

/// Load the root categories.
pub async fn load_roots(state: &AppState) -> bool {
    load_children(state, None, false).await
}

/// Expand `id` in the tree, loading its children the first time.
pub async fn expand(state: &AppState, id: CategoryId) {
    state.categories.write().await.expand(id);
    load_children(state, Some(id), false).await;
}

/// Fetch the hierarchy down to `max_depth` levels below the roots and return it.
///
/// Branches that fail to load are left without children; their error stays
/// on the tree for the caller to report.
pub async fn load_tree(state: &AppState, max_depth: usize) -> Vec<CategoryNode> {
    load_roots(state).await;

    let mut frontier: Vec<CategoryId> = state
        .categories
        .read()
        .await
        .roots()
        .map(|roots| roots.iter().map(|c| c.id).collect())
        .unwrap_or_default();

    for _ in 0..max_depth {
        if frontier.is_empty() {
            break;
        }
        join_all(frontier.iter().map(|&id| load_children(state, Some(id), false))).await;

        frontier = child_ids(&*state.categories.read().await, &frontier);
    }

    state.categories.read().await.build_tree()
}

/// Ids of the cached children of every id in `parents`.
fn child_ids(tree: &CategoryTree, parents: &[CategoryId]) -> Vec<CategoryId> {
    parents
        .iter()
        .filter_map(|&id| tree.children(Some(id)))
        .flatten()
        .map(|c| c.id)
        .collect()
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
