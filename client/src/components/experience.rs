//! Work history timeline.
//!
//! Hovering or focusing a card makes it the active one; only one card is
//! highlighted at a time.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::Reveal;
use crate::content::experience::{ENTRIES, SUMMARY};
use crate::util::icon::Icon;
use crate::util::visibility::stagger_ms;

#[component]
pub fn Experience() -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    let cards = ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_active = move || active.get() == Some(i);
            let achievements = entry
                .achievements
                .iter()
                .map(|a| {
                    view! {
                        <li>
                            <SvgIcon icon=Icon::ChevronRight />
                            <span>{*a}</span>
                        </li>
                    }
                })
                .collect_view();
            let skills = entry
                .skills
                .iter()
                .map(|s| view! { <span class="chip">{*s}</span> })
                .collect_view();
            view! {
                <Reveal delay_ms=stagger_ms(i) class="experience__item">
                    <div
                        class="experience__card"
                        class:experience__card--active=is_active
                        tabindex="0"
                        on:mouseenter=move |_| active.set(Some(i))
                        on:focusin=move |_| active.set(Some(i))
                        on:mouseleave=move |_| active.set(None)
                    >
                        <div class="experience__badge" style=entry.accent.css()>
                            <SvgIcon icon=entry.icon />
                        </div>
                        <div class="experience__header">
                            <h3>{entry.role}</h3>
                            <p class="experience__company">
                                <SvgIcon icon=Icon::Building />
                                {entry.company}
                            </p>
                            <p class="experience__meta">
                                <span>
                                    <SvgIcon icon=Icon::Calendar />
                                    {entry.duration}
                                </span>
                                <span>
                                    <SvgIcon icon=Icon::MapPin />
                                    {entry.location}
                                </span>
                                <span class="chip chip--muted">{entry.kind}</span>
                            </p>
                        </div>
                        <ul class="experience__achievements">{achievements}</ul>
                        <div class="experience__skills">{skills}</div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let summary = SUMMARY
        .iter()
        .map(|stat| {
            view! {
                <div class="experience__summary-stat">
                    <SvgIcon icon=stat.icon />
                    <span class="experience__summary-value">{stat.value}</span>
                    <span class="experience__summary-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="section experience">
            <Reveal>
                <h2 class="section__title">"Professional Journey"</h2>
            </Reveal>
            <div class="experience__timeline">{cards}</div>
            <Reveal class="experience__summary">{summary}</Reveal>
        </section>
    }
}
