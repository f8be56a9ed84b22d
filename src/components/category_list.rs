//! Sidebar listing category facets for the current version filter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::modules::ModulesState;
use crate::state::selection::Selection;
use crate::util::{compat, facets, results};

/// Category navigation. Clicking the active entry clears the filter.
#[component]
pub fn CategoryList() -> impl IntoView {
    let modules = expect_context::<RwSignal<ModulesState>>();
    let query = use_query_map();

    let entries = move || {
        let selection = Selection::from_query_map(&query.read());
        let derived = compat::derive_all(&modules.get().items);
        let visible = results::by_version(&derived, &selection);
        let facets = facets::category_facets(&visible, &selection);
        (selection, facets)
    };

    view! {
        <nav class="category-list" aria-label="Categories">
            <h2 class="category-list__heading">"Categories"</h2>
            {move || {
                let (selection, facets) = entries();
                let active_key = facets::selected_category(&facets, &selection)
                    .map(|facet| facet.key.clone());
                facets
                    .into_iter()
                    .map(|facet| {
                        let active = active_key.as_deref() == Some(facet.key.as_str());
                        view! {
                            <a
                                class="category-list__item"
                                class:category-list__item--active=active
                                href=facet.href
                            >
                                {facet.title}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
