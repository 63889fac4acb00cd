use super::*;
use crate::filter::{Category, FilterCriteria, category_counts, filter_projects};

#[test]
fn catalog_has_six_records_with_tech() {
    assert_eq!(CATALOG.len(), 6);
    for project in CATALOG {
        assert!(!project.tech.is_empty(), "{} has no tech tags", project.title);
        assert!(!project.title.is_empty());
        assert!(project.image.starts_with("https://"));
    }
}

#[test]
fn catalog_titles_are_unique() {
    let mut titles = CATALOG.iter().map(|p| p.title).collect::<Vec<_>>();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), CATALOG.len());
}

#[test]
fn catalog_category_counts() {
    let counts = category_counts(CATALOG);
    let by_category = |c: Category| counts.iter().find(|x| x.category == c).map(|x| x.count);
    assert_eq!(by_category(Category::All), Some(6));
    assert_eq!(by_category(Category::Featured), Some(3));
    // E-Learning (AI/ML) and Social Media (OpenAI API).
    assert_eq!(by_category(Category::Ai), Some(2));
}

#[test]
fn catalog_ai_records() {
    let criteria = FilterCriteria { category: Category::Ai, ..FilterCriteria::default() };
    let titles = filter_projects(CATALOG, &criteria)
        .into_iter()
        .map(|p| p.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Social Media Management Suite", "E-Learning Platform"]);
}

#[test]
fn has_tech_is_exact() {
    let project = &CATALOG[0];
    assert!(project.has_tech("Next.js"));
    assert!(!project.has_tech("next.js"));
    assert!(!project.has_tech("Next"));
}

#[test]
fn record_serializes_optional_github() {
    let json = serde_json::to_value(CATALOG[0]).unwrap();
    assert_eq!(json["title"], "AI-Powered E-commerce Platform");
    assert_eq!(json["featured"], true);
    assert_eq!(json["tech"][1], "TypeScript");
    assert!(json["github"].is_string());
}
