//! Tab row over the maintenance tiers present in the current view.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::modules::ModulesState;
use crate::state::selection::Selection;
use crate::util::{compat, facets, results};

/// Type tabs above the results. Unlike categories, the active tab stays
/// selected when clicked again.
#[component]
pub fn TypeTabs() -> impl IntoView {
    let modules = expect_context::<RwSignal<ModulesState>>();
    let query = use_query_map();

    let entries = move || {
        let selection = Selection::from_query_map(&query.read());
        let derived = compat::derive_all(&modules.get().items);
        let visible = results::by_version(&derived, &selection);
        let facets = facets::type_facets(&visible, &selection);
        (selection, facets)
    };

    view! {
        <nav class="type-tabs" aria-label="Module types">
            {move || {
                let (selection, facets) = entries();
                let active_key = facets::selected_type(&facets, &selection)
                    .map(|facet| facet.key.clone());
                facets
                    .into_iter()
                    .map(|facet| {
                        let active = active_key.as_deref() == Some(facet.key.as_str());
                        view! {
                            <a
                                class="type-tabs__tab"
                                class:type-tabs__tab--active=active
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
