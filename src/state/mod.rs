//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two things drive every view: the module cache ([`modules`]) and the
//! parsed URL query ([`selection`]). The cache is app-scoped context; the
//! selection is re-parsed from the router on every query change so the URL
//! stays the single source of truth for filters.

pub mod modules;
pub mod selection;
