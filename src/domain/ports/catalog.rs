use crate::domain::entities::{Category, Course};

/// Read-only lookup over the course catalog.
pub trait CourseCatalog: Send + Sync {
    fn all_courses(&self) -> Vec<Course>;
    fn find_course(&self, id: &str) -> Option<Course>;
    fn all_categories(&self) -> Vec<Category>;
    fn find_category(&self, id: &str) -> Option<Category>;
}
