//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each page owns one context signal wrapping a plain struct. The structs
//! delegate their rules to the `catalog` crate and return the fetch the page
//! must run, so the state transitions are testable without a browser.

pub mod catalog;
pub mod categories;
