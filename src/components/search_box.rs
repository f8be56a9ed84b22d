//! Free-text search over the directory.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::selection::Selection;

/// Search input bound to the `q` param. Each keystroke replaces the current
/// history entry instead of pushing one, so backing out of a search is one
/// step.
#[component]
pub fn SearchBox() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let current = move || {
        Selection::from_query_map(&query.read())
            .q
            .unwrap_or_default()
    };

    view! {
        <input
            class="search-box"
            type="search"
            placeholder="Search modules"
            aria-label="Search modules"
            prop:value=current
            on:input=move |ev| {
                let target = Selection::from_query_map(&query.read())
                    .with_search(&event_target_value(&ev));
                navigate(
                    &target.href(),
                    NavigateOptions {
                        replace: true,
                        scroll: false,
                        ..NavigateOptions::default()
                    },
                );
            }
        />
    }
}
