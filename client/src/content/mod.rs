//! Static page content.
//!
//! Everything the sections print that is not a project record. All of it is
//! compile-time data; icons and accents use the closed `Icon`/`Gradient` sets.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod about;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod skills;

use crate::util::icon::Icon;

/// A headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A stat tile that carries an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconStat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

/// An external profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}
