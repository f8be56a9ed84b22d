//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{directory::DirectoryPage, module::ModulePage};
use crate::state::modules::ModulesState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared module cache and sets up client-side routing. The
/// bare path and `/modules` render the same directory so old bookmarks keep
/// working.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let modules = RwSignal::new(ModulesState::default());
    provide_context(modules);

    view! {
        <Stylesheet id="leptos" href="/pkg/modules-ui.css"/>
        <Title text="Module Directory"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DirectoryPage/>
                <Route path=StaticSegment("modules") view=DirectoryPage/>
                <Route path=(StaticSegment("modules"), ParamSegment("name")) view=ModulePage/>
            </Routes>
        </Router>
    }
}
