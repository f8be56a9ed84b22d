//! Directory page: the filterable, sortable module listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting kicks off the one-shot list fetch; everything after that is
//! derivation. Each reactive closure re-reads the cache and the query, runs
//! the pure pipeline in `util`, and hands plain data to the components, so
//! this file stays wiring plus layout.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::category_list::CategoryList;
use crate::components::module_card::ModuleCard;
use crate::components::search_box::SearchBox;
use crate::components::site_header::SiteHeader;
use crate::components::sort_menu::SortMenu;
use crate::components::stats_bar::StatsBar;
use crate::components::type_tabs::TypeTabs;
use crate::components::version_switch::VersionSwitch;
use crate::net::fetch;
use crate::state::modules::ModulesState;
use crate::state::selection::Selection;
use crate::util::{compat, results};

/// The `/modules` route (and the landing page).
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let modules = expect_context::<RwSignal<ModulesState>>();
    fetch::load_modules(modules);

    let query = use_query_map();
    let result_list = move || {
        let selection = Selection::from_query_map(&query.read());
        let derived = compat::derive_all(&modules.get().items);
        results::results(&derived, &selection)
    };
    let still_loading = move || {
        let state = modules.get();
        state.loading && state.items.is_empty()
    };

    view! {
        <div class="directory-page">
            <SiteHeader/>
            <section class="directory-page__hero">
                <h1 class="directory-page__title">"Explore Modules"</h1>
                <StatsBar/>
            </section>
            <section class="directory-page__controls">
                <SearchBox/>
                <VersionSwitch/>
                <SortMenu/>
            </section>
            <div class="directory-page__body">
                <aside class="directory-page__sidebar">
                    <CategoryList/>
                </aside>
                <main class="directory-page__results">
                    <TypeTabs/>
                    <p class="directory-page__summary">
                        {move || results_summary(result_list().len())}
                    </p>
                    {move || {
                        if still_loading() {
                            return view! {
                                <p class="directory-page__loading">"Loading modules..."</p>
                            }
                            .into_any();
                        }
                        let found = result_list();
                        if found.is_empty() {
                            view! {
                                <p class="directory-page__none">
                                    "No modules match the current filters."
                                </p>
                            }
                            .into_any()
                        } else {
                            found
                                .into_iter()
                                .map(|module| view! { <ModuleCard module=module/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}

/// Count line above the results.
fn results_summary(count: usize) -> String {
    if count == 1 {
        "1 module".to_owned()
    } else {
        format!("{count} modules")
    }
}
