//! Glue between the REST helpers and the shared modules state.
//!
//! Pages call these on mount and on param changes; the pure planning
//! methods on [`ModulesState`] decide whether the network is involved at
//! all. Requests only exist under `hydrate`, so server renders and native
//! test builds never spawn anything.

use leptos::prelude::*;

use crate::state::modules::{FetchPlan, ModulesState};

/// Ensure the module list is loaded, fetching it at most once.
pub fn load_modules(state: RwSignal<ModulesState>) {
    if !state.get_untracked().should_fetch_list() {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_modules().await;
            if fetched.is_none() {
                leptos::logging::warn!("module list fetch failed; rendering an empty directory");
            }
            state.update(|s| s.apply_list(fetched));
        });
    }
}

/// Resolve the record for the detail page, preferring caches over the
/// network. A network miss flips the state's `not_found` flag.
pub fn load_module(state: RwSignal<ModulesState>, name: &str) {
    match state.get_untracked().plan_lookup(name) {
        FetchPlan::Skip => {}
        FetchPlan::UseCached(module) => state.update(|s| s.select(module)),
        FetchPlan::Network => {
            #[cfg(feature = "hydrate")]
            {
                let name = name.to_owned();
                // A stale 404 from a previous lookup would flash while this
                // request is in flight.
                state.update(|s| {
                    s.loading = true;
                    s.not_found = false;
                });
                leptos::task::spawn_local(async move {
                    let fetched = crate::net::api::fetch_module(&name).await;
                    if fetched.is_none() {
                        leptos::logging::warn!("module lookup failed for {name}");
                    }
                    state.update(|s| s.apply_lookup(fetched));
                });
            }
        }
    }
}
