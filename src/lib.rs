//! Native storefront: HTTP catalog client, shared state, and services.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pure filter and category logic lives in the `catalog` crate and is
//! shared with the browser client. This crate adds the network layer and the
//! async services the `storefront` binary runs against a live backend.

pub mod api;
pub mod config;
pub mod services;
pub mod state;
