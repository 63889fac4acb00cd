//! The one-page portfolio.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::experience::Experience;
use crate::components::floating_actions::FloatingActions;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::ui::UiState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::scroll_y;

        ui.maybe_update(|u| u.on_scroll(scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            ui.maybe_update(|u| u.on_scroll(scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }

    view! {
        <div class="page">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Experience />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
            <FloatingActions />
        </div>
    }
}
