//! Category tree page state.
//!
//! DESIGN
//! ======
//! Wraps the `catalog` tree cache. Operations that need a network call
//! return a [`LoadRequest`]; the page performs it and reports back through
//! `finish_load`, which drops superseded responses.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use catalog::{Category, CategoryId, CategoryTree, RequestToken};

/// A branch load the page must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub parent: Option<CategoryId>,
    pub token: RequestToken,
}

#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub tree: CategoryTree,
}

impl CategoriesState {
    fn begin(&mut self, parent: Option<CategoryId>, force: bool) -> Option<LoadRequest> {
        self.tree
            .begin_load(parent, force)
            .map(|token| LoadRequest { parent, token })
    }

    /// Load the root level unless it is cached or in flight.
    pub fn begin_roots(&mut self) -> Option<LoadRequest> {
        self.begin(None, false)
    }

    /// Flip a row open or closed. Opening a never-loaded branch asks for its children.
    pub fn toggle(&mut self, id: CategoryId) -> Option<LoadRequest> {
        if self.tree.toggle(id) { self.begin(Some(id), false) } else { None }
    }

    /// Re-fetch one branch, e.g. after it failed.
    pub fn reload(&mut self, parent: Option<CategoryId>) -> Option<LoadRequest> {
        self.begin(parent, true)
    }

    pub fn finish_load(&mut self, request: LoadRequest, result: Result<Vec<Category>, String>) -> bool {
        self.tree.complete_load(request.parent, request.token, result)
    }
}
