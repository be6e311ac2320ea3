//! Lazily loaded category hierarchy.
//!
//! DESIGN
//! ======
//! Children are cached per parent key (`None` is the root level). Each key
//! tracks its own loading token and error message, so loading, failing, or
//! collapsing one branch never touches another. Expansion is pure UI state
//! and does not clear caches.
//!
//! Loads for the same key are not cancelled: every `begin_load` issues a new
//! token and only the completion carrying the latest token for that key is
//! applied (last started wins). Earlier completions are discarded.
//!
//! Rendering consumes [`CategoryTree::build_tree`] or
//! [`CategoryTree::visible_rows`], plain data built from the cache.

#[cfg(test)]
#[path = "category_tree_test.rs"]
mod category_tree_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::store::RequestToken;
use crate::types::Category;

pub type CategoryId = i64;

/// A category with its loaded subtree. `children` is `None` until fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Option<Vec<CategoryNode>>,
}

impl CategoryNode {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(CategoryNode::node_count)
            .sum::<usize>()
    }
}

/// One visible line of the flattened tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub category: Category,
    pub depth: usize,
    pub expanded: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryTree {
    children: HashMap<Option<CategoryId>, Vec<Category>>,
    loading: HashMap<Option<CategoryId>, RequestToken>,
    errors: HashMap<Option<CategoryId>, String>,
    expanded: HashSet<CategoryId>,
    next_token: RequestToken,
}

impl CategoryTree {
    /// Cached children of `parent` (`None` for the roots).
    #[must_use]
    pub fn children(&self, parent: Option<CategoryId>) -> Option<&[Category]> {
        self.children.get(&parent).map(Vec::as_slice)
    }

    #[must_use]
    pub fn roots(&self) -> Option<&[Category]> {
        self.children(None)
    }

    #[must_use]
    pub fn is_loading(&self, parent: Option<CategoryId>) -> bool {
        self.loading.contains_key(&parent)
    }

    #[must_use]
    pub fn error(&self, parent: Option<CategoryId>) -> Option<&str> {
        self.errors.get(&parent).map(String::as_str)
    }

    #[must_use]
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.contains(&id)
    }

    /// Start loading the children of `parent`.
    ///
    /// Returns `None` when the branch is cached or already loading, unless
    /// `force` is set. A forced load supersedes any in-flight one.
    pub fn begin_load(&mut self, parent: Option<CategoryId>, force: bool) -> Option<RequestToken> {
        if !force && (self.children.contains_key(&parent) || self.loading.contains_key(&parent)) {
            return None;
        }
        self.next_token += 1;
        self.loading.insert(parent, self.next_token);
        self.errors.remove(&parent);
        Some(self.next_token)
    }

    /// Record the outcome of the load identified by `token`.
    ///
    /// Returns `false` when a newer load for the same key was started (or the
    /// key already settled), leaving the tree untouched.
    pub fn complete_load(
        &mut self,
        parent: Option<CategoryId>,
        token: RequestToken,
        result: Result<Vec<Category>, String>,
    ) -> bool {
        if self.loading.get(&parent) != Some(&token) {
            tracing::debug!(?parent, token, "discarding stale category response");
            return false;
        }
        self.loading.remove(&parent);
        match result {
            Ok(children) => {
                self.errors.remove(&parent);
                self.children.insert(parent, children);
            }
            Err(message) => {
                self.errors.insert(parent, message);
            }
        }
        true
    }

    pub fn expand(&mut self, id: CategoryId) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: CategoryId) {
        self.expanded.remove(&id);
    }

    /// Flip the expansion of `id`; returns `true` when it is now expanded.
    pub fn toggle(&mut self, id: CategoryId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Build the loaded tree under the cached roots.
    #[must_use]
    pub fn build_tree(&self) -> Vec<CategoryNode> {
        self.build_children(None, &mut Vec::new()).unwrap_or_default()
    }

    /// Cached children of `parent` as nodes, recursing through cached branches.
    /// An id already on the current path is emitted without children.
    fn build_children(&self, parent: Option<CategoryId>, path: &mut Vec<CategoryId>) -> Option<Vec<CategoryNode>> {
        let children = self.children.get(&parent)?;
        let nodes = children
            .iter()
            .map(|category| {
                let children = if path.contains(&category.id) {
                    None
                } else {
                    path.push(category.id);
                    let nested = self.build_children(Some(category.id), path);
                    path.pop();
                    nested
                };
                CategoryNode { category: category.clone(), children }
            })
            .collect();
        Some(nodes)
    }

    /// Depth-first rows for the roots and every expanded, loaded branch.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.push_rows(None, 0, &mut Vec::new(), &mut rows);
        rows
    }

    fn push_rows(&self, parent: Option<CategoryId>, depth: usize, path: &mut Vec<CategoryId>, rows: &mut Vec<TreeRow>) {
        let Some(children) = self.children.get(&parent) else {
            return;
        };
        for category in children {
            let key = Some(category.id);
            let expanded = self.is_expanded(category.id);
            rows.push(TreeRow {
                category: category.clone(),
                depth,
                expanded,
                loading: self.is_loading(key),
                error: self.error(key).map(str::to_owned),
            });
            if expanded && !path.contains(&category.id) {
                path.push(category.id);
                self.push_rows(key, depth + 1, path, rows);
                path.pop();
            }
        }
    }
}
