//! Projects section: category tabs, search, tag picker, and the grid.
//!
//! Owns the filter inputs in a local `RwSignal<ProjectsState>`. The visible
//! list is a memo over that signal, so the grid re-renders only when the
//! filtered set actually changes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::SvgIcon;
use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;
use crate::state::projects::{ProjectsState, category_tabs, tech_tags};
use crate::util::icon::Icon;

#[component]
pub fn Projects() -> impl IntoView {
    let state = RwSignal::new(ProjectsState::default());
    let visible = Memo::new(move |_| state.with(ProjectsState::visible));
    let is_active = move || state.with(|s| s.criteria.is_active());

    let tabs = category_tabs()
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || state.with(|s| s.criteria.category == tab.category)
                    on:click=move |_| state.update(|s| s.set_category(tab.category))
                >
                    {tab.label}
                    <span class="tabs__count">{tab.count}</span>
                </button>
            }
        })
        .collect_view();

    let tag_picker = move || {
        tech_tags()
            .into_iter()
            .map(|tag| {
                view! {
                    <button
                        class="chip chip--toggle"
                        class:chip--selected=move || state.with(|s| s.is_selected(tag))
                        on:click=move |_| state.update(|s| s.toggle_tech(tag))
                    >
                        {tag}
                    </button>
                }
            })
            .collect_view()
    };

    let grid = move || {
        let projects = visible.get();
        if projects.is_empty() {
            return view! {
                <div class="projects__empty">
                    <SvgIcon icon=Icon::Search class="projects__empty-icon" />
                    <h3>"No projects found"</h3>
                    <p>"Try adjusting your search or filters."</p>
                    <button class="btn btn--primary" on:click=move |_| state.update(ProjectsState::clear)>
                        "Clear all filters"
                    </button>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="projects__grid">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="section projects">
            <Reveal>
                <h2 class="section__title">"Featured Projects"</h2>
            </Reveal>

            <div class="projects__controls">
                <div class="tabs">{tabs}</div>

                <div class="projects__search">
                    <SvgIcon icon=Icon::Search />
                    <input
                        type="search"
                        placeholder="Search projects..."
                        aria-label="Search projects"
                        prop:value=move || state.with(|s| s.criteria.query.clone())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    />
                    <Show when=move || state.with(|s| !s.criteria.query.is_empty())>
                        <button
                            class="projects__search-clear"
                            aria-label="Clear search"
                            on:click=move |_| state.update(ProjectsState::clear_query)
                        >
                            <SvgIcon icon=Icon::Close />
                        </button>
                    </Show>
                </div>

                <button
                    class="btn btn--ghost"
                    class:btn--active=move || state.with(|s| s.tag_picker_open)
                    on:click=move |_| state.update(ProjectsState::toggle_picker)
                >
                    <SvgIcon icon=Icon::Filter />
                    {move || {
                        let selected = state.with(|s| s.criteria.tech.len());
                        if selected == 0 { "Technologies".to_owned() } else { format!("Technologies ({selected})") }
                    }}
                </button>

                <Show when=is_active>
                    <button class="btn btn--link" on:click=move |_| state.update(ProjectsState::clear)>
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <Show when=move || state.with(|s| s.tag_picker_open)>
                <div class="projects__tags">{tag_picker}</div>
            </Show>

            {grid}
        </section>
    }
}
