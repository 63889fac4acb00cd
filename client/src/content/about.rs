use super::IconStat;
use crate::util::icon::Icon;

pub static OVERVIEW: &[&str] = &[
    "I'm a Senior Frontend Developer with a passion for building intuitive, high-performance web \
applications. With expertise in modern JavaScript frameworks and AI integration, I transform complex \
requirements into elegant, user-centric solutions.",
    "Currently leading frontend development at NexG Tech, I specialize in architecting scalable \
applications that deliver exceptional user experiences while maintaining clean, maintainable code.",
];

pub static STATS: &[IconStat] = &[
    IconStat { icon: Icon::Code, value: "100K+", label: "Lines of Code Written" },
    IconStat { icon: Icon::Trophy, value: "50+", label: "Projects Completed" },
    IconStat { icon: Icon::Zap, value: "99.9%", label: "Uptime" },
    IconStat { icon: Icon::Briefcase, value: "4.5+", label: "Years Experience" },
];

pub static TECH_EXPERTISE: &[(Icon, &str)] = &[
    (Icon::Code2, "React/Next.js"),
    (Icon::Cpu, "AI/ML Integration"),
    (Icon::LayoutDashboard, "UI/UX Design"),
    (Icon::Sparkles, "Modern Web"),
];
