//! Pure projections behind the directory views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the pages render is computed here from two inputs: the cached
//! module list and the parsed URL selection. Keeping these functions free of
//! signals and DOM types means the whole view model runs under plain
//! `cargo test`; the components are thin wiring over them.

pub mod compat;
pub mod dark_mode;
pub mod facets;
pub mod format;
pub mod query_string;
pub mod repo_ref;
pub mod results;
pub mod stats;
