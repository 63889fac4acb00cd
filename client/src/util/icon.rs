//! Icon set.
//!
//! A closed enumeration of the glyphs the page draws. Each maps to stroke
//! path data on a 24x24 grid, rendered by `components::icon::SvgIcon`.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    ArrowUp,
    Bot,
    Briefcase,
    Building,
    Calendar,
    ChevronRight,
    Close,
    Code,
    Code2,
    Cpu,
    Eye,
    FileText,
    Filter,
    GitBranch,
    Github,
    Layout,
    LayoutDashboard,
    LayoutGrid,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Palette,
    Phone,
    Search,
    Send,
    Server,
    Smartphone,
    Sparkles,
    Star,
    Target,
    TrendingUp,
    Trophy,
    Users,
    Zap,
}

impl Icon {
    pub const ALL: [Icon; 38] = [
        Icon::ArrowRight,
        Icon::ArrowUp,
        Icon::Bot,
        Icon::Briefcase,
        Icon::Building,
        Icon::Calendar,
        Icon::ChevronRight,
        Icon::Close,
        Icon::Code,
        Icon::Code2,
        Icon::Cpu,
        Icon::Eye,
        Icon::FileText,
        Icon::Filter,
        Icon::GitBranch,
        Icon::Github,
        Icon::Layout,
        Icon::LayoutDashboard,
        Icon::LayoutGrid,
        Icon::Lightbulb,
        Icon::Linkedin,
        Icon::Mail,
        Icon::MapPin,
        Icon::Menu,
        Icon::MessageSquare,
        Icon::Palette,
        Icon::Phone,
        Icon::Search,
        Icon::Send,
        Icon::Server,
        Icon::Smartphone,
        Icon::Sparkles,
        Icon::Star,
        Icon::Target,
        Icon::TrendingUp,
        Icon::Trophy,
        Icon::Users,
        Icon::Zap,
    ];

    /// Stroke path data, drawn in order.
    #[must_use]
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Self::ArrowUp => &["M12 19V5", "M5 12l7-7 7 7"],
            Self::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Self::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Self::Building => &[
                "M6 2h12a2 2 0 0 1 2 2v18H4V4a2 2 0 0 1 2-2z",
                "M9 22v-4h6v4",
                "M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01",
            ],
            Self::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            Self::ChevronRight => &["M9 18l6-6-6-6"],
            Self::Close => &["M18 6L6 18", "M6 6l12 12"],
            Self::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Self::Code2 => &["M18 16l4-4-4-4", "M6 8l-4 4 4 4", "M14.5 4l-5 16"],
            Self::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M9 9h6v6H9z",
                "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
            ],
            Self::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Self::FileText => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
                "M10 9H8",
            ],
            Self::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
            Self::GitBranch => &[
                "M6 3v12",
                "M15 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M18 9a9 9 0 0 1-9 9",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            Self::LayoutDashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Self::LayoutGrid => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M14 14h7v7h-7z", "M3 14h7v7H3z"],
            Self::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Self::Menu => &["M4 6h16", "M4 12h16", "M11 18h9"],
            Self::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Palette => &[
                "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z",
                "M13 6.5h.01M17 10.5h.01M8 7.5h.01M6.5 12.5h.01",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Search => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "M21 21l-4.35-4.35"],
            Self::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
            Self::Server => &[
                "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                "M6 6h.01M6 18h.01",
            ],
            Self::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Self::Sparkles => &[
                "M12 3l1.9 5.8a2 2 0 0 0 1.3 1.3L21 12l-5.8 1.9a2 2 0 0 0-1.3 1.3L12 21l-1.9-5.8a2 2 0 0 0-1.3-1.3L3 12l5.8-1.9a2 2 0 0 0 1.3-1.3z",
                "M5 3v4M19 17v4M3 5h4M17 19h4",
            ],
            Self::Star => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"],
            Self::Target => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::TrendingUp => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
            Self::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2z",
            ],
            Self::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M23 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }

    /// Accessible name for icon-only buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow right",
            Self::ArrowUp => "arrow up",
            Self::Bot => "assistant",
            Self::Briefcase => "briefcase",
            Self::Building => "building",
            Self::Calendar => "calendar",
            Self::ChevronRight => "chevron right",
            Self::Close => "close",
            Self::Code | Self::Code2 => "code",
            Self::Cpu => "processor",
            Self::Eye => "view",
            Self::FileText => "document",
            Self::Filter => "filter",
            Self::GitBranch => "branch",
            Self::Github => "GitHub",
            Self::Layout => "layout",
            Self::LayoutDashboard => "dashboard",
            Self::LayoutGrid => "grid",
            Self::Lightbulb => "idea",
            Self::Linkedin => "LinkedIn",
            Self::Mail => "email",
            Self::MapPin => "location",
            Self::Menu => "menu",
            Self::MessageSquare => "message",
            Self::Palette => "palette",
            Self::Phone => "phone",
            Self::Search => "search",
            Self::Send => "send",
            Self::Server => "server",
            Self::Smartphone => "smartphone",
            Self::Sparkles => "sparkles",
            Self::Star => "star",
            Self::Target => "target",
            Self::TrendingUp => "trending up",
            Self::Trophy => "trophy",
            Self::Users => "people",
            Self::Zap => "lightning",
        }
    }
}
