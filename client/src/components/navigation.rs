//! Fixed top navigation with in-page links and the mobile menu.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::content::profile::{NAV_ITEMS, RESUME_PATH, SHORT_NAME};
use crate::state::ui::UiState;
use crate::util::icon::Icon;
use crate::util::scroll::{scroll_to_section, scroll_to_top, section_id};

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let go_to = move |label: &'static str| {
        scroll_to_section(&section_id(label));
        ui.update(UiState::close_menu);
    };

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|label| {
                view! {
                    <button class="nav__link" on:click=move |_| go_to(label)>
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav" class:nav--scrolled=move || ui.get().scrolled>
            <div class="nav__inner">
                <button class="nav__logo" on:click=move |_| scroll_to_top()>
                    {SHORT_NAME}
                </button>

                <div class="nav__links">
                    {links}
                    <a class="nav__resume" href=RESUME_PATH target="_blank" rel="noopener noreferrer">
                        "Resume"
                    </a>
                </div>

                <button
                    class="nav__menu-toggle"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                    aria-label="Toggle menu"
                    aria-expanded=move || ui.get().mobile_menu_open.to_string()
                >
                    {move || {
                        let icon = if ui.get().mobile_menu_open { Icon::Close } else { Icon::Menu };
                        view! { <SvgIcon icon=icon /> }
                    }}
                </button>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <div class="nav__mobile">
                    {links}
                    <a class="nav__resume" href=RESUME_PATH target="_blank" rel="noopener noreferrer">
                        "Resume"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
