//! Skills section: category tabs over skill bars, soft skills, languages.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::Reveal;
use crate::components::skill_bar::SkillBar;
use crate::content::skills::{LANGUAGES, SOFT_SKILLS, SkillCategory};
use crate::util::icon::Icon;

#[component]
pub fn Skills() -> impl IntoView {
    let active = RwSignal::new(SkillCategory::default());

    let tabs = SkillCategory::ALL
        .into_iter()
        .map(|category| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active.get() == category
                    on:click=move |_| active.set(category)
                >
                    <SvgIcon icon=category.icon() />
                    {category.label()}
                </button>
            }
        })
        .collect_view();

    let bars = move || {
        active
            .get()
            .skills()
            .iter()
            .enumerate()
            .map(|(index, skill)| view! { <SkillBar skill=*skill index=index /> })
            .collect_view()
    };

    let soft = SOFT_SKILLS
        .iter()
        .map(|(icon, label)| {
            view! {
                <li class="skills__soft">
                    <SvgIcon icon=*icon />
                    <span>{*label}</span>
                </li>
            }
        })
        .collect_view();

    let languages = LANGUAGES
        .iter()
        .map(|lang| view! { <span class="chip">{*lang}</span> })
        .collect_view();

    view! {
        <section id="skills" class="section skills">
            <Reveal>
                <h2 class="section__title">"Skills & Expertise"</h2>
            </Reveal>
            <div class="tabs">{tabs}</div>
            <div class="skills__grid">
                <Reveal class="skills__bars">{bars}</Reveal>
                <Reveal delay_ms=200 class="skills__side">
                    <h3>
                        <SvgIcon icon=Icon::Users />
                        "Soft Skills"
                    </h3>
                    <ul class="skills__soft-list">{soft}</ul>
                    <h3>
                        <SvgIcon icon=Icon::MessageSquare />
                        "Languages"
                    </h3>
                    <div class="skills__languages">{languages}</div>
                </Reveal>
            </div>
        </section>
    }
}
