//! Route-level page components.

pub mod catalog;
pub mod categories;
