//! Project catalog routes.
//!
//! Read-only views over the static catalog. Filtering uses the same
//! `FilterCriteria` the client runs in the browser, so results agree.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use catalog::{Category, CategoryCount, FilterCriteria, ProjectRecord};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
    /// Comma-separated exact tags, all required.
    pub tech: Option<String>,
    pub q: Option<String>,
}

impl ProjectQuery {
    /// Convert raw query parameters into filter criteria.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `category` names no known category.
    pub fn into_criteria(self) -> Result<FilterCriteria, catalog::ParseCategoryError> {
        let category = match self.category.as_deref() {
            Some(raw) => raw.parse::<Category>()?,
            None => Category::All,
        };
        let tech = self
            .tech
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(FilterCriteria { category, tech, query: self.q.unwrap_or_default() })
    }
}

/// `GET /api/projects`: filtered records in catalog order.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<ProjectRecord>>, (StatusCode, Json<serde_json::Value>)> {
    let criteria = query
        .into_criteria()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": e.to_string() }))))?;
    let projects = catalog::filter_projects(state.projects, &criteria)
        .into_iter()
        .copied()
        .collect();
    Ok(Json(projects))
}

/// `GET /api/projects/tech`: every distinct tag, sorted.
pub async fn list_tech(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(catalog::all_tech_tags(state.projects))
}

/// `GET /api/projects/categories`: offered category tabs with counts.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    Json(catalog::category_counts(state.projects))
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
