//! Site header: brand link plus the dark mode toggle.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Header shown on every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Runs once after hydration; the stored preference only exists in the
    // browser, so the server render always starts light.
    Effect::new(move || {
        let enabled = dark_mode::initial();
        dark_mode::set(enabled);
        dark.set(enabled);
    });

    let on_toggle = move |_| {
        let next = !dark.get_untracked();
        dark_mode::set(next);
        dark.set(next);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Module Directory"</a>
            <button
                class="site-header__theme"
                on:click=on_toggle
                aria-label="Toggle dark mode"
            >
                {move || if dark.get() { "Light" } else { "Dark" }}
            </button>
        </header>
    }
}
