//! Project records and the static catalog.
//!
//! DESIGN
//! ======
//! Records borrow `'static` strings so the whole catalog is a `static`
//! slice built at compile time. Nothing creates, edits or removes a record
//! at runtime; consumers only ever hold `&'static ProjectRecord`.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use serde::Serialize;

/// One portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// Technology tags in display order. Never empty.
    pub tech: &'static [&'static str],
    /// Preview image URL.
    pub image: &'static str,
    /// Live demo location.
    pub link: &'static str,
    pub github: Option<&'static str>,
    /// The author's role on the project.
    pub role: &'static str,
    /// Impact bullet points, shown when a card is expanded.
    pub impact: &'static [&'static str],
    pub featured: bool,
}

impl ProjectRecord {
    /// Exact, case-sensitive tag membership.
    #[must_use]
    pub fn has_tech(&self, tag: &str) -> bool {
        self.tech.iter().any(|t| *t == tag)
    }
}

/// Every project shown on the site, in display order.
pub static CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        title: "AI-Powered E-commerce Platform",
        description: "Developed a full-stack e-commerce solution with personalized AI recommendations, real-time chat support, and seamless checkout process. Integrated with payment gateways and inventory management.",
        tech: &["Next.js", "TypeScript", "Node.js", "MongoDB"],
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=500&fit=crop",
        link: "#",
        github: Some("https://github.com/yourusername/ai-ecommerce"),
        role: "Lead Full-Stack Developer",
        impact: &[
            "Increased conversion rates by 35% through AI-powered recommendations",
            "Reduced server response time by 40% with optimized database queries",
            "Improved user engagement by 60% with real-time chat support",
        ],
        featured: true,
    },
    ProjectRecord {
        title: "Enterprise Analytics Dashboard",
        description: "Built a comprehensive analytics platform with real-time data visualization, custom reporting, and team collaboration features. Integrated with multiple data sources for unified business intelligence.",
        tech: &["React", "D3.js", "TypeScript", "Node.js", "PostgreSQL"],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=500&fit=crop",
        link: "#",
        github: Some("https://github.com/yourusername/analytics-dashboard"),
        role: "Frontend Lead",
        impact: &[
            "Delivered 50+ interactive data visualizations",
            "Improved dashboard load time by 65% with code splitting",
            "Enabled data-driven decisions with custom reporting tools",
        ],
        featured: true,
    },
    ProjectRecord {
        title: "Social Media Management Suite",
        description: "Created a multi-platform social media management tool with AI-powered content generation, scheduling, and performance analytics.",
        tech: &["Next.js", "TypeScript", "NestJS", "MongoDB", "OpenAI API"],
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=500&fit=crop",
        link: "#",
        github: Some("https://github.com/yourusername/social-suite"),
        role: "Full Stack Developer",
        impact: &[
            "Reduced content creation time by 70% with AI assistance",
            "Grew to 5,000+ active users in first 3 months",
            "Achieved 99.9% uptime with scalable architecture",
        ],
        featured: true,
    },
    ProjectRecord {
        title: "Real Estate Marketplace",
        description: "Developed a property listing platform with virtual tours, AI-powered property matching, and secure document handling for real estate transactions.",
        tech: &["React", "TypeScript", "Node.js", "MongoDB"],
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=500&fit=crop",
        link: "#",
        github: Some("https://github.com/yourusername/real-estate-platform"),
        role: "Full Stack Developer",
        impact: &[
            "Increased agent productivity by 40% with automated workflows",
            "Reduced property search time by 60% with AI matching",
            "Processed $5M+ in transactions in first year",
        ],
        featured: false,
    },
    ProjectRecord {
        title: "E-Learning Platform",
        description: "Built a scalable learning management system with course creation tools, progress tracking, and AI-powered recommendations.",
        tech: &["Next.js", "TypeScript", "PostgreSQL", "AI/ML"],
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=800&h=500&fit=crop",
        link: "#",
        github: Some("https://github.com/yourusername/elearning-platform"),
        role: "Backend Developer",
        impact: &[
            "Supported 10,000+ concurrent users with optimized queries",
            "Improved course completion rates by 45% with personalized learning paths",
            "Reduced server costs by 30% with efficient caching",
        ],
        featured: false,
    },
    ProjectRecord {
        title: "Healthcare Management System",
        description: "Developed a patient management system with appointment scheduling, medical records, and AI-powered symptom checking.",
        tech: &["React", "TypeScript", "Node.js", "MongoDB"],
        image: "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?q=80&w=3540&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        link: "#",
        github: Some("https://github.com/yourusername/healthcare-system"),
        role: "Full Stack Developer",
        impact: &[
            "Reduced patient wait times by 50% with online scheduling",
            "Improved diagnosis accuracy with AI-assisted symptom checking",
            "Achieved HIPAA compliance for all data handling",
        ],
        featured: false,
    },
];
