//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the catalog REST endpoints. Payload types come from the
//! `catalog` crate so the browser and native clients decode the same schema.

pub mod api;
