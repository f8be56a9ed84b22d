//! Headline ecosystem counters under the directory title.

use leptos::prelude::*;

use crate::state::modules::ModulesState;
use crate::util::format::format_count;
use crate::util::stats;

/// Downloads, contributors, and module totals over the whole cache.
/// Filters never change these numbers; only the fetch does.
#[component]
pub fn StatsBar() -> impl IntoView {
    let modules = expect_context::<RwSignal<ModulesState>>();
    let totals = move || stats::directory_stats(&modules.get().items);

    view! {
        <div class="stats-bar">
            <span class="stats-bar__stat">
                <strong>{move || format_count(totals().downloads)}</strong>
                " downloads"
            </span>
            <span class="stats-bar__stat">
                <strong>{move || totals().contributors}</strong>
                " contributors"
            </span>
            <span class="stats-bar__stat">
                <strong>{move || totals().modules}</strong>
                " modules"
            </span>
        </div>
    }
}
