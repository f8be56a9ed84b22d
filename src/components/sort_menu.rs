//! Sort key and direction controls.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::selection::{ORDERS, SORTS, Selection};

/// Sort menu: one link per sort key, plus the two direction arrows.
/// Fallbacks mean something is always highlighted, even on a bare URL.
#[component]
pub fn SortMenu() -> impl IntoView {
    let query = use_query_map();
    let selection = move || Selection::from_query_map(&query.read());

    view! {
        <nav class="sort-menu" aria-label="Sort order">
            <span class="sort-menu__keys">
                {move || {
                    let selection = selection();
                    let active_key = selection.sort_key().key;
                    SORTS
                        .iter()
                        .map(|entry| {
                            let active = entry.key == active_key;
                            view! {
                                <a
                                    class="sort-menu__key"
                                    class:sort-menu__key--active=active
                                    href=selection.with_sort(entry.key).href()
                                >
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </span>
            <span class="sort-menu__orders">
                {move || {
                    let selection = selection();
                    let active_order = selection.sort_order().key;
                    ORDERS
                        .iter()
                        .map(|entry| {
                            let active = entry.key == active_order;
                            view! {
                                <a
                                    class="sort-menu__order"
                                    class:sort-menu__order--active=active
                                    href=selection.with_order(entry.key).href()
                                    title=entry.label
                                >
                                    {entry.icon}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </span>
        </nav>
    }
}
