//! Accent gradients.
//!
//! Every accent on the page comes from this closed set. Components never
//! carry color strings; they carry a `Gradient` and ask it for CSS.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;

/// A two-stop accent gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gradient {
    Amber,
    BlueCyan,
    Blush,
    Cobalt,
    Coral,
    Ember,
    Emerald,
    Forest,
    IndigoPurple,
    Lagoon,
    Lilac,
    Mint,
    Ocean,
    Orchid,
    PurplePink,
    Rose,
    Silver,
    Sky,
    Slate,
    Teal,
    Turquoise,
}

impl Gradient {
    pub const ALL: [Gradient; 21] = [
        Gradient::Amber,
        Gradient::BlueCyan,
        Gradient::Blush,
        Gradient::Cobalt,
        Gradient::Coral,
        Gradient::Ember,
        Gradient::Emerald,
        Gradient::Forest,
        Gradient::IndigoPurple,
        Gradient::Lagoon,
        Gradient::Lilac,
        Gradient::Mint,
        Gradient::Ocean,
        Gradient::Orchid,
        Gradient::PurplePink,
        Gradient::Rose,
        Gradient::Silver,
        Gradient::Sky,
        Gradient::Slate,
        Gradient::Teal,
        Gradient::Turquoise,
    ];

    /// Start and end colors as hex strings.
    #[must_use]
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Self::Amber => ("#facc15", "#f97316"),
            Self::BlueCyan => ("#3b82f6", "#22d3ee"),
            Self::Blush => ("#f43f5e", "#ec4899"),
            Self::Cobalt => ("#2563eb", "#60a5fa"),
            Self::Coral => ("#f87171", "#ec4899"),
            Self::Ember => ("#f97316", "#ef4444"),
            Self::Emerald => ("#22c55e", "#34d399"),
            Self::Forest => ("#16a34a", "#4ade80"),
            Self::IndigoPurple => ("#818cf8", "#a855f7"),
            Self::Lagoon => ("#34d399", "#06b6d4"),
            Self::Lilac => ("#d8b4fe", "#f472b6"),
            Self::Mint => ("#22c55e", "#10b981"),
            Self::Ocean => ("#60a5fa", "#2563eb"),
            Self::Orchid => ("#c084fc", "#ec4899"),
            Self::PurplePink => ("#a855f7", "#ec4899"),
            Self::Rose => ("#f472b6", "#f43f5e"),
            Self::Silver => ("#e5e7eb", "#9ca3af"),
            Self::Sky => ("#60a5fa", "#06b6d4"),
            Self::Slate => ("#d1d5db", "#6b7280"),
            Self::Teal => ("#10b981", "#2dd4bf"),
            Self::Turquoise => ("#22d3ee", "#3b82f6"),
        }
    }

    /// Inline `background-image` declaration.
    #[must_use]
    pub fn css(self) -> String {
        let (from, to) = self.stops();
        format!("background-image: linear-gradient(135deg, {from}, {to});")
    }

    /// Same gradient at low opacity, for card washes.
    #[must_use]
    pub fn wash_css(self) -> String {
        let (from, to) = self.stops();
        format!("background-image: linear-gradient(135deg, {from}33, {to}33);")
    }

    /// Accent for a project tech tag, when one is assigned.
    #[must_use]
    pub fn for_tech(tag: &str) -> Option<Gradient> {
        let gradient = match tag {
            "React" => Self::BlueCyan,
            "Next.js" => Self::Silver,
            "TypeScript" => Self::Cobalt,
            "Node.js" => Self::Emerald,
            "MongoDB" => Self::Forest,
            "PostgreSQL" => Self::Ocean,
            "AI/ML" => Self::PurplePink,
            "OpenAI API" => Self::Orchid,
            "Tailwind CSS" => Self::Turquoise,
            "Docker" => Self::Sky,
            "AWS" => Self::Amber,
            "CI/CD" => Self::Mint,
            _ => return None,
        };
        Some(gradient)
    }
}

/// Primary and secondary accents for a project card.
///
/// Missing tags read as "React" and "TypeScript"; unmapped tags fall back to
/// `PurplePink` and `BlueCyan`.
#[must_use]
pub fn card_accent(tech: &[&str]) -> (Gradient, Gradient) {
    let primary = tech.first().copied().unwrap_or("React");
    let secondary = tech.get(1).copied().unwrap_or("TypeScript");
    (
        Gradient::for_tech(primary).unwrap_or(Gradient::PurplePink),
        Gradient::for_tech(secondary).unwrap_or(Gradient::BlueCyan),
    )
}

/// Inline style blending a card's two accents.
#[must_use]
pub fn card_accent_css(tech: &[&str]) -> String {
    let (primary, secondary) = card_accent(tech);
    let (a, _) = primary.stops();
    let (_, b) = secondary.stops();
    format!("background-image: linear-gradient(135deg, {a}33, {b}33);")
}
