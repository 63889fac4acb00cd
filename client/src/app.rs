//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::profile::NAME;
use crate::pages::portfolio::PortfolioPage;
use crate::state::{chat::ChatState, ui::UiState};
use crate::util::visibility::{NO_SCRIPT_CSS, VisibilityHandle};

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
                <noscript>
                    <style>{NO_SCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-wide state and the reveal capability, then routes to
/// the single portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(VisibilityHandle::for_environment());

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=format!("{NAME} | Senior Frontend Developer")/>
        <Meta name="description" content="Portfolio, projects, and contact details."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
