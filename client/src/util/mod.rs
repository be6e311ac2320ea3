//! Small formatting and routing helpers shared by pages and components.

pub mod format;
