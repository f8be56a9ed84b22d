//! Version filter pills.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::selection::{Selection, VERSIONS};

/// Fixed pill row for the compatibility filter. Clicking the active pill
/// clears it, returning to the unfiltered list.
#[component]
pub fn VersionSwitch() -> impl IntoView {
    let query = use_query_map();
    let selection = move || Selection::from_query_map(&query.read());

    view! {
        <nav class="version-switch" aria-label="Framework version">
            {move || {
                let selection = selection();
                VERSIONS
                    .iter()
                    .map(|entry| {
                        let active = selection.version.as_deref() == Some(entry.key);
                        view! {
                            <a
                                class="version-switch__pill"
                                class:version-switch__pill--active=active
                                href=selection.with_version_toggled(entry.key).href()
                            >
                                {entry.label}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
