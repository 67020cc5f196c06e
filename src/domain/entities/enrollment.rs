use super::course::Course;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Lifecycle of a user's relationship to a course.
///
/// `NotEnrolled -> Enrolled -> Completed`; there are no reverse transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    NotEnrolled,
    Enrolled,
    Completed,
}

/// One user's enrollment in one course, in the layout persisted by the
/// storage tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    pub enrollment_date: DateTime<Utc>,
    #[serde(default)]
    pub completed_modules: BTreeSet<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Enrollment {
    /// Create a fresh enrollment with no completed modules.
    pub fn new(user_id: impl Into<String>, course: &Course) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.into(),
            course_id: course.id.clone(),
            course_name: course.title.clone(),
            enrollment_date: Utc::now(),
            completed_modules: BTreeSet::new(),
            is_completed: false,
        }
    }

    pub fn status(&self) -> EnrollmentStatus {
        if self.is_completed {
            EnrollmentStatus::Completed
        } else {
            EnrollmentStatus::Enrolled
        }
    }

    /// Record a completed module. Returns `false` when it was already recorded.
    ///
    /// When the course is known, `is_completed` is recomputed against its full
    /// module set. Completion never reverts.
    pub fn complete_module(&mut self, module_id: &str, course: Option<&Course>) -> bool {
        if !self.completed_modules.insert(module_id.to_string()) {
            return false;
        }

        if let Some(course) = course {
            self.recompute_completion(course);
        }

        true
    }

    /// Set `is_completed` once every course module is done. Never clears it.
    pub fn recompute_completion(&mut self, course: &Course) {
        let covers_course = !course.modules.is_empty()
            && course
                .module_ids()
                .all(|id| self.completed_modules.contains(id));
        self.is_completed = self.is_completed || covers_course;
    }

    /// Share of the course's modules completed, rounded down.
    pub fn progress_percent(&self, course: &Course) -> u8 {
        let total = course.modules.len();
        if total == 0 {
            return 0;
        }
        let done = course
            .module_ids()
            .filter(|id| self.completed_modules.contains(*id))
            .count();
        // done <= total, so the quotient fits in a u8
        (done * 100 / total) as u8
    }
}

/// Enrollment joined with its catalog entry. The course may be missing when
/// the catalog no longer lists it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Option<Course>,
    pub progress_percent: u8,
}

impl EnrollmentWithCourse {
    pub fn new(enrollment: Enrollment, course: Option<Course>) -> Self {
        let progress_percent = course
            .as_ref()
            .map(|c| enrollment.progress_percent(c))
            .unwrap_or(0);
        Self {
            enrollment,
            course,
            progress_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub enrollments: Vec<EnrollmentWithCourse>,
    pub in_progress: usize,
    pub completed: usize,
}

impl DashboardSummary {
    pub fn from_enrollments(enrollments: Vec<EnrollmentWithCourse>) -> Self {
        let completed = enrollments
            .iter()
            .filter(|e| e.enrollment.is_completed)
            .count();
        Self {
            in_progress: enrollments.len() - completed,
            completed,
            enrollments,
        }
    }
}
