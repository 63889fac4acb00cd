//! Animated proficiency bar.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

use leptos::prelude::*;

use crate::content::skills::Skill;
use crate::util::visibility::stagger_ms;

/// Inline style for the fill. `--level` carries the target width for the
/// no-script stylesheet.
#[must_use]
pub fn fill_style(skill: &Skill, filled: bool) -> String {
    let width = if filled { skill.level } else { 0 };
    format!("--level: {}%; width: {width}%; {}", skill.level, skill.accent.css())
}

/// Fills to `skill.level` percent after `index × 100 ms`. Bars start empty
/// on both server and browser.
#[component]
pub fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let filled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let delay = std::time::Duration::from_millis(u64::from(stagger_ms(index)));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            // The tab may have switched; a disposed signal is fine to skip.
            let _ = filled.try_set(true);
        });
    }

    let style = move || fill_style(&skill, filled.get());

    view! {
        <div class="skill-bar">
            <div class="skill-bar__label">
                <span>{skill.name}</span>
                <span class="skill-bar__level">{format!("{}%", skill.level)}</span>
            </div>
            <div
                class="skill-bar__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level.to_string()
            >
                <div
                    class="skill-bar__fill"
                    style=style
                    data-delay=stagger_ms(index).to_string()
                ></div>
            </div>
        </div>
    }
}
