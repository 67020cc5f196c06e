use crate::domain::entities::{Category, Course};
use crate::domain::ports::catalog::CourseCatalog;
use serde::Deserialize;

const BUILTIN_CATALOG: &str = include_str!("catalog_data.json");

#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    courses: Vec<Course>,
}

/// Immutable catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    courses: Vec<Course>,
}

impl StaticCatalog {
    pub fn new(categories: Vec<Category>, courses: Vec<Course>) -> Self {
        Self {
            categories,
            courses,
        }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        Ok(Self::new(doc.categories, doc.courses))
    }
}

impl CourseCatalog for StaticCatalog {
    fn all_courses(&self) -> Vec<Course> {
        self.courses.clone()
    }

    fn find_course(&self, id: &str) -> Option<Course> {
        self.courses.iter().find(|c| c.id == id).cloned()
    }

    fn all_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn find_category(&self, id: &str) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert_eq!(catalog.all_courses().len(), 5);
        assert_eq!(catalog.all_categories().len(), 5);
    }

    #[test]
    fn test_every_course_has_three_modules() {
        let catalog = StaticCatalog::builtin().unwrap();
        for course in catalog.all_courses() {
            let ids: Vec<&str> = course.module_ids().collect();
            assert_eq!(ids, vec!["m1", "m2", "m3"], "course {}", course.id);
        }
    }

    #[test]
    fn test_every_course_category_exists() {
        let catalog = StaticCatalog::builtin().unwrap();
        let names: Vec<String> = catalog
            .all_categories()
            .into_iter()
            .map(|c| c.name)
            .collect();
        for course in catalog.all_courses() {
            assert!(names.contains(&course.category), "{}", course.category);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert_eq!(
            catalog.find_course("1").map(|c| c.title),
            Some("Human Anatomy Fundamentals".to_string())
        );
        assert!(catalog.find_course("99").is_none());
        assert_eq!(
            catalog.find_category("3").map(|c| c.name),
            Some("Surgery".to_string())
        );
    }
}
