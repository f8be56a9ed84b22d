//! Route-level pages.

pub mod directory;
pub mod module;
