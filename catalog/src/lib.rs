//! Project catalog model and filter for the portfolio site.
//!
//! This crate is UI-framework agnostic so both `client` (reactive filtering
//! in the browser) and `server` (the JSON catalog API) consume the same
//! records and the same predicates.

pub mod filter;
pub mod project;

pub use filter::{
    AI_TECH_TAGS, Category, CategoryCount, FilterCriteria, ParseCategoryError, all_tech_tags, category_counts,
    filter_projects,
};
pub use project::{CATALOG, ProjectRecord};
