//! Shared module cache and fetch bookkeeping.
//!
//! One `RwSignal<ModulesState>` is provided at the app root and read by both
//! pages. The methods here are the pure half of the fetch protocol: they
//! decide whether the network is needed and fold results back in, so the
//! tricky paths (cache hits, failures, the 404 flag) are testable without a
//! browser. `net::fetch` owns the async half.

#[cfg(test)]
#[path = "modules_test.rs"]
mod modules_test;

use crate::net::types::Module;

/// Client-side cache of the registry plus per-page fetch flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModulesState {
    /// Raw records from the list endpoint; empty until the first successful
    /// fetch. Projections derive from this, never mutate it.
    pub items: Vec<Module>,
    /// A request is in flight.
    pub loading: bool,
    /// Record shown on the detail page, when resolved.
    pub selected: Option<Module>,
    /// The last by-name lookup failed; the detail page renders its 404 view.
    pub not_found: bool,
}

/// What a detail-page lookup should do next.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchPlan {
    /// The requested record is already selected.
    Skip,
    /// The list cache has the record; select it without a request.
    UseCached(Module),
    /// Not cached anywhere; go to the network.
    Network,
}

impl ModulesState {
    /// Whether the list endpoint needs to be hit. False once records are
    /// cached or while a request is already out, so repeated page visits
    /// cost at most one fetch.
    pub fn should_fetch_list(&self) -> bool {
        self.items.is_empty() && !self.loading
    }

    /// Fold a list fetch result in. Failure reads as an empty directory
    /// rather than an error page.
    pub fn apply_list(&mut self, fetched: Option<Vec<Module>>) {
        self.items = fetched.unwrap_or_default();
        self.loading = false;
    }

    /// Decide how to resolve a by-name lookup against the caches.
    pub fn plan_lookup(&self, name: &str) -> FetchPlan {
        if self
            .selected
            .as_ref()
            .is_some_and(|module| module.name == name)
        {
            return FetchPlan::Skip;
        }
        match self.items.iter().find(|module| module.name == name) {
            Some(module) => FetchPlan::UseCached(module.clone()),
            None => FetchPlan::Network,
        }
    }

    /// Select a record out of the list cache.
    pub fn select(&mut self, module: Module) {
        self.selected = Some(module);
        self.not_found = false;
    }

    /// Fold a by-name fetch result in; a miss flips the 404 flag.
    pub fn apply_lookup(&mut self, fetched: Option<Module>) {
        match fetched {
            Some(module) => self.select(module),
            None => self.not_found = true,
        }
        self.loading = false;
    }
}
