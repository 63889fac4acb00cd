use super::*;
use crate::util::links::{mailto_link, tel_link};

#[test]
fn three_experience_entries_with_four_achievements() {
    assert_eq!(experience::ENTRIES.len(), 3);
    assert!(experience::ENTRIES.iter().all(|e| e.achievements.len() == 4));
    assert_eq!(experience::SUMMARY.len(), 4);
}

#[test]
fn every_skill_category_has_five_bars_within_range() {
    for category in skills::SkillCategory::ALL {
        let bars = category.skills();
        assert_eq!(bars.len(), 5, "{category:?}");
        assert!(bars.iter().all(|s| s.level <= 100));
    }
}

#[test]
fn default_skill_category_is_frontend() {
    assert_eq!(skills::SkillCategory::default(), skills::SkillCategory::Frontend);
    assert_eq!(skills::SkillCategory::Ai.label(), "AI/ML");
}

#[test]
fn soft_skills_and_languages() {
    assert_eq!(skills::SOFT_SKILLS.len(), 6);
    assert_eq!(skills::LANGUAGES.len(), 3);
}

#[test]
fn contact_links_match_profile() {
    let email = super::contact::METHODS.iter().find(|m| m.title == "Email").unwrap();
    assert_eq!(email.link, mailto_link(profile::EMAIL));
    let phone = super::contact::METHODS.iter().find(|m| m.title == "Phone").unwrap();
    assert_eq!(phone.link, tel_link(profile::PHONE));
    assert_eq!(super::contact::METHODS.len(), 5);
}

#[test]
fn navigation_targets_are_single_words() {
    assert!(profile::NAV_ITEMS.iter().all(|item| !item.contains(' ')));
    assert_eq!(profile::HEADLINE_ROLES.len(), 4);
}
