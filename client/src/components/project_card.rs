//! One project tile in the projects grid.

use catalog::ProjectRecord;
use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::util::gradient::{Gradient, card_accent_css};
use crate::util::icon::Icon;

/// Clicking the card toggles the impact list.
#[component]
pub fn ProjectCard(project: &'static ProjectRecord, index: usize) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let chips = project
        .tech
        .iter()
        .map(|tag| {
            let style = Gradient::for_tech(tag).map(Gradient::wash_css).unwrap_or_default();
            view! { <span class="chip" style=style>{*tag}</span> }
        })
        .collect_view();

    view! {
        <article
            class="project-card"
            class:project-card--expanded=move || expanded.get()
            on:click=move |_| expanded.update(|e| *e = !*e)
        >
            <div class="project-card__media">
                <img src=project.image alt=project.title loading="lazy" />
                <div class="project-card__accent" style=card_accent_css(project.tech)></div>
                <span class="project-card__index">{format!("{:02}", index + 1)}</span>
                <Show when=move || project.featured>
                    <span class="project-card__featured">
                        <SvgIcon icon=Icon::Star />
                        "Featured"
                    </span>
                </Show>
            </div>

            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__role">
                    <SvgIcon icon=Icon::Briefcase />
                    {project.role}
                </p>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__chips">{chips}</div>

                <Show when=move || expanded.get() && !project.impact.is_empty()>
                    <div class="project-card__impact">
                        <h4>"Key Impact"</h4>
                        <ul>
                            {project
                                .impact
                                .iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            <SvgIcon icon=Icon::TrendingUp />
                                            <span>{*line}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Show>

                <div class="project-card__links" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer">
                                    <SvgIcon icon=Icon::Github />
                                    "Code"
                                </a>
                            }
                        })}
                    <a href=project.link target="_blank" rel="noopener noreferrer">
                        <SvgIcon icon=Icon::Eye />
                        "Live Demo"
                    </a>
                    <button
                        class="project-card__toggle"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Less" } else { "Details" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
