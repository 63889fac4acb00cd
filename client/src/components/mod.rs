//! UI components for the portfolio page.
//!
//! One component per page section plus a few shared pieces (`SvgIcon`,
//! `Reveal`, `ProjectCard`, `SkillBar`).

pub mod about;
pub mod contact;
pub mod experience;
pub mod floating_actions;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navigation;
pub mod project_card;
pub mod projects;
pub mod reveal;
pub mod skill_bar;
pub mod skills;
