//! Who the site is about: hero copy, stats, and outbound links.

use super::{SocialLink, Stat};
use crate::util::icon::Icon;

pub const NAME: &str = "Ranjit Kairi";
pub const SHORT_NAME: &str = "Ranjit.";
pub const EMAIL: &str = "ranjitkairi990@gmail.com";
pub const PHONE: &str = "+91 9127301592";
pub const WHATSAPP_NUMBER: &str = "9127301592";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const PORTRAIT_PATH: &str = "/my-img.jpeg";
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Rotated by the hero typewriter.
pub static HEADLINE_ROLES: &[&str] = &["Senior Frontend Developer", "React Specialist", "AI Enthusiast", "Team Leader"];

pub const INTRO: &str = "I craft exceptional digital experiences using cutting-edge technologies. \
With over 4.5 years at NexG Tech, I specialize in building scalable, AI-powered web applications \
that drive business growth and user engagement.";

pub static HERO_STATS: &[Stat] = &[
    Stat { value: "4.5+", label: "Years Experience" },
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "10+", label: "Team Members Led" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expertise {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static EXPERTISE: &[Expertise] = &[
    Expertise { icon: Icon::Code, title: "Frontend Development", description: "React, Next.js, TypeScript" },
    Expertise { icon: Icon::Cpu, title: "AI Integration", description: "AI-powered applications & tools" },
    Expertise { icon: Icon::Layout, title: "UI/UX Design", description: "Beautiful, intuitive interfaces" },
    Expertise { icon: Icon::Users, title: "Team Leadership", description: "Mentoring & project management" },
];

pub static HERO_SOCIAL: &[SocialLink] = &[
    SocialLink { icon: Icon::Github, label: "GitHub", href: "https://github.com/ranjitkairi" },
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "https://linkedin.com/in/ranjitkairi" },
    SocialLink { icon: Icon::Mail, label: "Email", href: "mailto:ranjitkairi990@gmail.com" },
];

pub static FOOTER_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://linkedin.com/in/ranjitkairi"),
    ("GitHub", "https://github.com/ranjitkairi"),
    ("Medium", "https://medium.com/@ranjitkairi"),
];

/// In-page navigation labels; each scrolls to the section with the lowercased id.
pub static NAV_ITEMS: &[&str] = &["About", "Skills", "Projects", "Contact"];
