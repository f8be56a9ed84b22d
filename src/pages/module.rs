//! Module detail page.
//!
//! DESIGN
//! ======
//! The record is resolved through the shared cache: a repeat visit is free,
//! a directory click is a cache hit, and only a cold deep link goes to the
//! network. A lookup miss renders the fixed 404 view instead of an error
//! boundary; the HTTP status stays with the server.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::site_header::SiteHeader;
use crate::net::fetch;
use crate::state::modules::ModulesState;
use crate::state::selection::DIRECTORY_PATH;
use crate::util::compat;
use crate::util::facets;
use crate::util::format::format_count;
use crate::util::repo_ref::RepoRef;

const NOT_FOUND_TITLE: &str = "Module not found";
const NOT_FOUND_BODY: &str = "This page does not exist.";

/// The `/modules/{name}` route.
#[component]
pub fn ModulePage() -> impl IntoView {
    let modules = expect_context::<RwSignal<ModulesState>>();
    let params = use_params_map();

    // Re-runs when the `name` segment changes, so navigating between detail
    // pages reuses this component.
    Effect::new(move || {
        if let Some(name) = params.read().get("name") {
            fetch::load_module(modules, &name);
        }
    });

    view! {
        <div class="module-page">
            <SiteHeader/>
            {move || {
                let state = modules.get();
                if state.not_found {
                    return view! {
                        <section class="module-page__not-found">
                            <h1>{NOT_FOUND_TITLE}</h1>
                            <p>{NOT_FOUND_BODY}</p>
                            <a href=DIRECTORY_PATH>"Back to the directory"</a>
                        </section>
                    }
                    .into_any();
                }
                let Some(module) = state.selected else {
                    return view! { <p class="module-page__loading">"Loading module..."</p> }
                        .into_any();
                };

                let derived = compat::with_compatibility_tags(&module);
                let repo = RepoRef::parse(&derived.repo);
                let tier = facets::type_title(&derived.kind);
                let downloads = format_count(derived.downloads);
                let stars = format_count(derived.stars);
                let contributors = derived.contributors;

                view! {
                    <article class="module-page__detail">
                        <h1 class="module-page__name">{derived.name}</h1>
                        <p class="module-page__description">{derived.description}</p>
                        <span class="module-page__meta">
                            <span class="module-page__badge">{derived.category}</span>
                            <span class="module-page__badge">{tier}</span>
                            <span class="module-page__count">{downloads} " downloads"</span>
                            <span class="module-page__count">{format!("★ {stars}")}</span>
                        </span>
                        {repo
                            .map(|repo| {
                                let branch = branch_suffix(repo.reference.as_deref());
                                view! {
                                    <a
                                        class="module-page__repo"
                                        href=repo.github_url()
                                        target="_blank"
                                        rel="noreferrer"
                                    >
                                        {repo.label()}
                                    </a>
                                    {branch
                                        .map(|suffix| {
                                            view! {
                                                <span class="module-page__branch">{suffix}</span>
                                            }
                                        })}
                                }
                            })}
                        <span class="module-page__tags">
                            {derived
                                .tags
                                .into_iter()
                                .map(|tag| view! { <span class="module-page__tag">{tag}</span> })
                                .collect_view()}
                        </span>
                        {(!contributors.is_empty())
                            .then(|| {
                                view! {
                                    <section class="module-page__contributors">
                                        <h2>"Contributors"</h2>
                                        <ul>
                                            {contributors
                                                .into_iter()
                                                .map(|contributor| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} ({})",
                                                                contributor.login,
                                                                contributor.contributions,
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </section>
                                }
                            })}
                    </article>
                }
                .into_any()
            }}
        </div>
    }
}

/// Branch annotation shown after the repository link, when the repo field
/// carried a `#ref` suffix.
fn branch_suffix(reference: Option<&str>) -> Option<String> {
    reference.map(|branch| format!("#{branch}"))
}
