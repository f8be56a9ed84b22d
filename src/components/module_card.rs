//! Result card linking to a module's detail page.
//!
//! DESIGN
//! ======
//! Cards take an already-derived record by value: the parent closure
//! rebuilds the result list whenever the cache or the query changes, so
//! each card is a plain snapshot with no signals of its own.

use leptos::prelude::*;

use crate::net::types::Module;
use crate::util::format::format_count;

/// One module in the directory results grid.
#[component]
pub fn ModuleCard(module: Module) -> impl IntoView {
    let href = format!("/modules/{}", module.name);
    let downloads = format_count(module.downloads);
    let stars = format_count(module.stars);
    let tags = module.tags;

    view! {
        <a class="module-card" href=href>
            <span class="module-card__name">{module.name}</span>
            <p class="module-card__description">{module.description}</p>
            <span class="module-card__meta">
                <span class="module-card__category">{module.category}</span>
                <span class="module-card__count" title="Downloads">{downloads}</span>
                <span class="module-card__count" title="Stars">{format!("★ {stars}")}</span>
            </span>
            <span class="module-card__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="module-card__tag">{tag}</span> })
                    .collect_view()}
            </span>
        </a>
    }
}
