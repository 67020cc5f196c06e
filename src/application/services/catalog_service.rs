use crate::{
    config::LatencyConfig,
    domain::entities::{Category, Course, CourseFilter},
    domain::errors::{DomainError, DomainResult},
    domain::ports::catalog::CourseCatalog,
    domain::ports::time_service::TimeService,
};
use std::sync::Arc;

/// Catalog browsing with simulated read latency.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CourseCatalog>,
    time: Arc<dyn TimeService>,
    latency: LatencyConfig,
}

impl CatalogService {
    pub fn new(
        catalog: Arc<dyn CourseCatalog>,
        time: Arc<dyn TimeService>,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            catalog,
            time,
            latency,
        }
    }

    pub async fn list_courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.time.sleep(self.latency.read).await;

        self.catalog
            .all_courses()
            .into_iter()
            .filter(|course| filter.matches(course))
            .collect()
    }

    pub async fn get_course(&self, id: &str) -> DomainResult<Course> {
        self.time.sleep(self.latency.read).await;

        self.catalog
            .find_course(id)
            .ok_or_else(|| DomainError::NotFound(format!("Course {} not found", id)))
    }

    pub async fn list_categories(&self) -> Vec<Category> {
        self.catalog.all_categories()
    }

    /// Courses filed under a category, matched by category name.
    pub async fn courses_in_category(
        &self,
        category_id: &str,
    ) -> DomainResult<(Category, Vec<Course>)> {
        let category = self
            .catalog
            .find_category(category_id)
            .ok_or_else(|| DomainError::NotFound(format!("Category {} not found", category_id)))?;

        let filter = CourseFilter {
            category: Some(category.name.clone()),
            ..Default::default()
        };
        let courses = self.list_courses(&filter).await;

        Ok((category, courses))
    }
}
