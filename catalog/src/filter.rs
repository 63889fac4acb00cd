//! Catalog filtering.
//!
//! DESIGN
//! ======
//! The visible subset is the conjunction of three independent predicates
//! (category, technology tags, free-text query) evaluated per record. The
//! result preserves catalog order; there is no ranking.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::project::ProjectRecord;

/// Tags that place a record in the AI/ML category.
pub const AI_TECH_TAGS: [&str; 3] = ["AI/ML", "OpenAI API", "Machine Learning"];

// =============================================================================
// CATEGORY
// =============================================================================

/// Project category selector.
///
/// `Web`, `Mobile` and `Enterprise` are accepted but have no predicate: a
/// record never matches them, so selecting one yields an empty subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Featured,
    Web,
    Mobile,
    Ai,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Categories offered as tabs, in display order.
    #[must_use]
    pub fn offered() -> [Category; 3] {
        [Self::All, Self::Featured, Self::Ai]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Ai => "ai",
            Self::Enterprise => "enterprise",
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Featured => "Featured",
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Ai => "AI/ML",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Category predicate for a single record.
    #[must_use]
    pub fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Featured => project.featured,
            Self::Ai => project.tech.iter().any(|tag| AI_TECH_TAGS.contains(tag)),
            Self::Web | Self::Mobile | Self::Enterprise => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "featured" => Ok(Self::Featured),
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "ai" => Ok(Self::Ai),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

// =============================================================================
// CRITERIA
// =============================================================================

/// The three filter inputs owned by the projects section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Category,
    /// Required tags. Empty means no constraint.
    pub tech: BTreeSet<String>,
    /// Case-insensitive free-text query. Empty means no constraint.
    pub query: String,
}

impl FilterCriteria {
    /// Returns `true` when the record satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        self.category.matches(project) && self.matches_tech(project) && matches_query(project, &self.query)
    }

    fn matches_tech(&self, project: &ProjectRecord) -> bool {
        self.tech.iter().all(|tag| project.has_tech(tag))
    }

    /// Add the tag when absent, remove it when present.
    pub fn toggle_tech(&mut self, tag: &str) {
        if !self.tech.remove(tag) {
            self.tech.insert(tag.to_owned());
        }
    }

    /// Reset every input to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any input narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != Category::All || !self.tech.is_empty() || !self.query.is_empty()
    }
}

fn matches_query(project: &ProjectRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project
            .tech
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

/// The ordered subsequence of `projects` matching `criteria`.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [ProjectRecord], criteria: &FilterCriteria) -> Vec<&'a ProjectRecord> {
    projects
        .iter()
        .filter(|project| criteria.matches(project))
        .collect()
}

/// Every distinct tag in `projects`, sorted.
#[must_use]
pub fn all_tech_tags(projects: &[ProjectRecord]) -> Vec<&'static str> {
    projects
        .iter()
        .flat_map(|project| project.tech.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Badge count for one category tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}

/// Record counts for each offered category.
#[must_use]
pub fn category_counts(projects: &[ProjectRecord]) -> Vec<CategoryCount> {
    Category::offered()
        .into_iter()
        .map(|category| CategoryCount {
            category,
            label: category.label(),
            count: projects
                .iter()
                .filter(|project| category.matches(project))
                .count(),
        })
        .collect()
}
