//! Skill bars, soft skills, and spoken languages.

use crate::util::gradient::Gradient;
use crate::util::icon::Icon;

/// Tabs on the skills panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Ai,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [Self::Frontend, Self::Backend, Self::Ai, Self::Tools];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Ai => "AI/ML",
            Self::Tools => "Tools",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Frontend => Icon::Smartphone,
            Self::Backend => Icon::Server,
            Self::Ai => Icon::Cpu,
            Self::Tools => Icon::Code,
        }
    }

    #[must_use]
    pub fn skills(self) -> &'static [Skill] {
        match self {
            Self::Frontend => FRONTEND,
            Self::Backend => BACKEND,
            Self::Ai => AI,
            Self::Tools => TOOLS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
    pub accent: Gradient,
}

const fn skill(name: &'static str, level: u8, accent: Gradient) -> Skill {
    Skill { name, level, accent }
}

static FRONTEND: &[Skill] = &[
    skill("React.js", 95, Gradient::BlueCyan),
    skill("Next.js", 92, Gradient::Silver),
    skill("TypeScript", 90, Gradient::Cobalt),
    skill("Tailwind CSS", 94, Gradient::Turquoise),
    skill("Redux", 88, Gradient::PurplePink),
];

static BACKEND: &[Skill] = &[
    skill("Node.js", 90, Gradient::Emerald),
    skill("Express", 88, Gradient::Slate),
    skill("MongoDB", 85, Gradient::Forest),
    skill("PostgreSQL", 82, Gradient::Ocean),
    skill("RESTful APIs", 91, Gradient::IndigoPurple),
];

static AI: &[Skill] = &[
    skill("AI Integration", 89, Gradient::Orchid),
    skill("OpenAI API", 87, Gradient::Lilac),
    skill("LangChain", 83, Gradient::Amber),
    skill("Vector DBs", 81, Gradient::Lagoon),
    skill("ML Concepts", 78, Gradient::Rose),
];

static TOOLS: &[Skill] = &[
    skill("Git", 93, Gradient::Ember),
    skill("Docker", 85, Gradient::Sky),
    skill("AWS", 80, Gradient::Amber),
    skill("CI/CD", 87, Gradient::Mint),
    skill("Jest", 89, Gradient::Coral),
];

pub static SOFT_SKILLS: &[(Icon, &str)] = &[
    (Icon::Users, "Team Leadership"),
    (Icon::Lightbulb, "Problem Solving"),
    (Icon::Palette, "UI/UX Design"),
    (Icon::GitBranch, "Agile Development"),
    (Icon::Sparkles, "Mentoring"),
    (Icon::LayoutGrid, "Project Planning"),
];

pub static LANGUAGES: &[&str] = &["English (Native)", "Hindi (Fluent)", "Bengali (Fluent)"];
