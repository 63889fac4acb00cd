//! Work history shown on the experience timeline.

use super::IconStat;
use crate::util::gradient::Gradient;
use crate::util::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub icon: Icon,
    pub accent: Gradient,
}

pub static ENTRIES: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Senior Software Engineer",
        company: "Tech Innovators Inc.",
        duration: "2021 - Present",
        location: "San Francisco, CA",
        kind: "Full-time",
        achievements: &[
            "Led cross-functional team of 8 developers in microservices architecture",
            "Boosted system performance by 40% through strategic optimization",
            "Mentored 5 junior developers, increasing team productivity by 30%",
            "Architected cloud-native solutions serving 1M+ users daily",
        ],
        skills: &["React", "Node.js", "AWS", "Kubernetes", "TypeScript"],
        icon: Icon::Code,
        accent: Gradient::BlueCyan,
    },
    ExperienceEntry {
        role: "Software Engineer",
        company: "Digital Solutions Ltd.",
        duration: "2018 - 2021",
        location: "Austin, TX",
        kind: "Full-time",
        achievements: &[
            "Launched 3 major features reaching 50k+ active users",
            "Reduced API response time by 60% via database optimization",
            "Implemented CI/CD pipeline cutting deployment time by 70%",
            "Collaborated with cross-functional teams on agile development",
        ],
        skills: &["Python", "Django", "PostgreSQL", "Docker", "Jenkins"],
        icon: Icon::Zap,
        accent: Gradient::PurplePink,
    },
    ExperienceEntry {
        role: "Junior Developer",
        company: "WebCraft Studios",
        duration: "2016 - 2018",
        location: "Denver, CO",
        kind: "Full-time",
        achievements: &[
            "Built responsive web applications with modern frameworks",
            "Collaborated with UI/UX team for pixel-perfect implementations",
            "Optimized page load times by 45% through performance tuning",
            "Contributed to open-source projects and internal tooling",
        ],
        skills: &["JavaScript", "Vue.js", "SASS", "Git", "Webpack"],
        icon: Icon::Target,
        accent: Gradient::Teal,
    },
];

pub static SUMMARY: &[IconStat] = &[
    IconStat { icon: Icon::Calendar, value: "7+", label: "Years Experience" },
    IconStat { icon: Icon::Trophy, value: "50+", label: "Projects Delivered" },
    IconStat { icon: Icon::Users, value: "100k+", label: "Users Impacted" },
    IconStat { icon: Icon::Star, value: "98%", label: "Client Satisfaction" },
];
