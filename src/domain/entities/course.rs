use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A unit of course content. Ids are unique within a course only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: u32,
    pub category: String,
    pub instructor: String,
    pub duration: String,
    pub level: CourseLevel,
    pub modules: Vec<Module>,
}

impl Course {
    pub fn find_module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// Catalog query. Every populated field narrows the result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = course.title.to_lowercase().contains(&term)
                || course.description.to_lowercase().contains(&term)
                || course.instructor.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if course.category != category {
                return false;
            }
        }

        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course {
            id: "1".to_string(),
            title: "Human Anatomy Fundamentals".to_string(),
            description: "Body systems".to_string(),
            image_url: String::new(),
            price: 199,
            category: "Anatomy".to_string(),
            instructor: "Dr. Sarah Johnson".to_string(),
            duration: "12 weeks".to_string(),
            level: CourseLevel::Beginner,
            modules: vec![],
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(CourseFilter::default().matches(&sample_course()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = CourseFilter {
            search: Some("ANATOMY".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&sample_course()));

        let filter = CourseFilter {
            search: Some("johnson".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&sample_course()));
    }

    #[test]
    fn test_category_and_level_must_both_match() {
        let filter = CourseFilter {
            category: Some("Anatomy".to_string()),
            level: Some(CourseLevel::Advanced),
            ..Default::default()
        };
        assert!(!filter.matches(&sample_course()));
    }
}
