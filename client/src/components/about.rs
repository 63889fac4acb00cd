//! About section: overview, stat tiles, and technical focus areas.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::Reveal;
use crate::content::about::{OVERVIEW, STATS, TECH_EXPERTISE};
use crate::util::visibility::stagger_ms;

#[component]
pub fn About() -> impl IntoView {
    let paragraphs = OVERVIEW.iter().map(|p| view! { <p>{*p}</p> }).collect_view();

    let stats = STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <Reveal delay_ms=stagger_ms(i) class="about__stat">
                    <SvgIcon icon=stat.icon class="about__stat-icon" />
                    <span class="about__stat-value">{stat.value}</span>
                    <span class="about__stat-label">{stat.label}</span>
                </Reveal>
            }
        })
        .collect_view();

    let tech = TECH_EXPERTISE
        .iter()
        .map(|(icon, label)| {
            view! {
                <li class="about__tech">
                    <SvgIcon icon=*icon />
                    <span>{*label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section about">
            <Reveal>
                <h2 class="section__title">"About Me"</h2>
            </Reveal>
            <div class="about__grid">
                <Reveal class="about__copy">
                    {paragraphs}
                    <ul class="about__tech-list">{tech}</ul>
                    <div class="about__badge">
                        <span class="about__badge-dot"></span>
                        <span>"Available for new opportunities"</span>
                        <strong>"Open to Work"</strong>
                    </div>
                </Reveal>
                <div class="about__stats">{stats}</div>
            </div>
        </section>
    }
}
