//! Filter inputs for the projects section.
//!
//! The three inputs live in a `FilterCriteria` from the `catalog` crate so
//! the client and the `/api/projects` route share one predicate. The visible
//! list is recomputed from these fields on every read.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use catalog::{Category, CategoryCount, FilterCriteria, ProjectRecord, CATALOG};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub criteria: FilterCriteria,
    pub tag_picker_open: bool,
}

impl ProjectsState {
    pub fn set_category(&mut self, category: Category) {
        self.criteria.category = category;
    }

    pub fn toggle_tech(&mut self, tag: &str) {
        self.criteria.toggle_tech(tag);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.criteria.query.clear();
    }

    /// Reset every filter input. The picker keeps its open state.
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn toggle_picker(&mut self) {
        self.tag_picker_open = !self.tag_picker_open;
    }

    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.criteria.tech.contains(tag)
    }

    /// Catalog records passing the current filter, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static ProjectRecord> {
        catalog::filter_projects(CATALOG, &self.criteria)
    }
}

/// Category tabs with their badge counts.
#[must_use]
pub fn category_tabs() -> Vec<CategoryCount> {
    catalog::category_counts(CATALOG)
}

/// Every tag the picker offers.
#[must_use]
pub fn tech_tags() -> Vec<&'static str> {
    catalog::all_tech_tags(CATALOG)
}
