//! Landing section: name, rotating headline, calls to action, and stats.

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::components::reveal::Reveal;
use crate::content::profile::{
    EXPERTISE, HERO_SOCIAL, HERO_STATS, INTRO, NAME, PORTRAIT_PATH, RESUME_PATH,
};
use crate::util::icon::Icon;
use crate::util::scroll::scroll_to_section;
use crate::util::visibility::stagger_ms;

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let mut writer = crate::util::typewriter::Typewriter::new(crate::content::profile::HEADLINE_ROLES);
            loop {
                let delay = writer.tick();
                // Stop once the section is gone and its signal disposed.
                if typed.try_set(writer.text()).is_some() {
                    break;
                }
                gloo_timers::future::sleep(delay).await;
            }
        });
    }

    let stats = HERO_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="hero__stat">
                    <span class="hero__stat-value">{stat.value}</span>
                    <span class="hero__stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    let expertise = EXPERTISE
        .iter()
        .enumerate()
        .map(|(i, card)| {
            view! {
                <Reveal delay_ms=stagger_ms(i) class="hero__expertise-card">
                    <SvgIcon icon=card.icon class="hero__expertise-icon" />
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </Reveal>
            }
        })
        .collect_view();

    let social = HERO_SOCIAL
        .iter()
        .map(|link| {
            view! {
                <a
                    class="hero__social-link"
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                >
                    <SvgIcon icon=link.icon />
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero">
            <div class="hero__grid">
                <Reveal class="hero__copy">
                    <p class="hero__greeting">"Hi, I'm"</p>
                    <h1 class="hero__name">{NAME}</h1>
                    <p class="hero__role">
                        <span>{move || typed.get()}</span>
                        <span class="hero__cursor">"|"</span>
                    </p>
                    <p class="hero__intro">{INTRO}</p>

                    <div class="hero__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| {
                                scroll_to_section("projects");
                            }
                        >
                            "View My Work"
                            <SvgIcon icon=Icon::ArrowRight />
                        </button>
                        <a class="btn btn--ghost" href=RESUME_PATH download="">
                            <SvgIcon icon=Icon::FileText />
                            "Download Resume"
                        </a>
                    </div>

                    <div class="hero__stats">{stats}</div>
                    <div class="hero__social">{social}</div>
                </Reveal>

                <Reveal delay_ms=200 class="hero__portrait">
                    <img src=PORTRAIT_PATH alt=NAME loading="eager" />
                </Reveal>
            </div>

            <div class="hero__expertise">{expertise}</div>
        </section>
    }
}
