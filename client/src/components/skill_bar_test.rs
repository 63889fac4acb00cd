use super::*;
use crate::util::gradient::Gradient;

const RUST: Skill = Skill { name: "Rust", level: 85, accent: Gradient::Ember };

#[test]
fn unfilled_bar_is_empty_but_keeps_its_level() {
    let style = fill_style(&RUST, false);
    assert!(style.starts_with("--level: 85%; width: 0%;"), "{style}");
}

#[test]
fn filled_bar_reaches_its_level() {
    let style = fill_style(&RUST, true);
    assert!(style.contains("width: 85%;"), "{style}");
    assert!(style.ends_with(&Gradient::Ember.css()), "{style}");
}
