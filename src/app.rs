//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{StaticSegment, components::{Route, Router, Routes}};

use crate::pages::home::HomePage;
use crate::state::theme::ThemeMode;
use crate::state::ui::UiState;
use crate::util;

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
/// Provides the shared theme and UI state contexts, restores the persisted
/// theme preference, and sets up client-side routing for the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeMode::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    // Restore the persisted preference once on mount. Tracks nothing, so it
    // runs a single time in the browser.
    Effect::new(move || {
        theme.set(util::theme::initial_mode());
    });

    // Keep the document attribute in sync with the current mode.
    Effect::new(move || {
        util::theme::apply(theme.get());
    });

    // Clear the startup transition guard once the page has fully loaded.
    Effect::new(move || {
        util::load_guard::finish_on_load();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Alex Chen | Full-Stack Developer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
