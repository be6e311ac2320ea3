//! Reusable view components.

pub mod filter_panel;
pub mod product_card;
