//! Registry API access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser is the only place requests happen: `api` holds the
//! `gloo-net` calls (stubbed off outside `hydrate`), `types` the serde
//! mirror of the registry payloads, and `fetch` the task glue that folds
//! responses into the shared state.

pub mod api;
pub mod fetch;
pub mod types;
