use crate::{
    config::LatencyConfig,
    domain::entities::{
        DashboardSummary, Enrollment, EnrollmentStatus, EnrollmentWithCourse, Module,
    },
    domain::errors::{EnrollmentError, EnrollmentResult},
    domain::ports::catalog::CourseCatalog,
    domain::ports::enrollment_store::{EnrollmentStore, LocatedEnrollment},
    domain::ports::time_service::TimeService,
};
use std::sync::Arc;

/// Enrollment and progress tracking on top of the tiered store.
#[derive(Clone)]
pub struct EnrollmentService {
    store: Arc<dyn EnrollmentStore>,
    catalog: Arc<dyn CourseCatalog>,
    time: Arc<dyn TimeService>,
    latency: LatencyConfig,
}

impl EnrollmentService {
    pub fn new(
        store: Arc<dyn EnrollmentStore>,
        catalog: Arc<dyn CourseCatalog>,
        time: Arc<dyn TimeService>,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            time,
            latency,
        }
    }

    /// Whether the user holds an enrollment for the course.
    ///
    /// Tier selection is per user: if the durable tier knows the user, the
    /// fallback tier is not consulted even when the course is absent.
    pub async fn is_enrolled(&self, user_id: &str, course_id: &str) -> bool {
        self.store.read_all(user_id).await.contains_course(course_id)
    }

    /// Lifecycle state of the user's enrollment, using the same tier
    /// selection as `is_enrolled`.
    pub async fn enrollment_status(&self, user_id: &str, course_id: &str) -> EnrollmentStatus {
        self.store
            .read_all(user_id)
            .await
            .enrollments
            .iter()
            .find(|e| e.course_id == course_id)
            .map(Enrollment::status)
            .unwrap_or(EnrollmentStatus::NotEnrolled)
    }

    /// Enroll a user in a course.
    pub async fn enroll(&self, user_id: &str, course_id: &str) -> EnrollmentResult<Enrollment> {
        self.time.sleep(self.latency.enroll).await;

        // 1. Reject duplicates
        if self.is_enrolled(user_id, course_id).await {
            return Err(EnrollmentError::AlreadyEnrolled {
                course_id: course_id.to_string(),
            });
        }

        // 2. Resolve the course
        let course = self
            .catalog
            .find_course(course_id)
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_id.to_string()))?;

        // 3. Commit, durable first
        let enrollment = Enrollment::new(user_id, &course);
        let tier = self.store.upsert_one(user_id, &enrollment).await?;

        metrics::counter!("enrollments_created_total").increment(1);
        tracing::info!(
            user_id,
            course_id,
            enrollment_id = %enrollment.id,
            tier = %tier,
            "User enrolled in course"
        );

        Ok(enrollment)
    }

    /// All of the user's enrollments joined with their catalog entries.
    pub async fn list_enrollments(&self, user_id: &str) -> Vec<EnrollmentWithCourse> {
        self.time.sleep(self.latency.read).await;

        self.store
            .read_all(user_id)
            .await
            .enrollments
            .into_iter()
            .map(|enrollment| {
                let course = self.catalog.find_course(&enrollment.course_id);
                EnrollmentWithCourse::new(enrollment, course)
            })
            .collect()
    }

    pub async fn dashboard(&self, user_id: &str) -> DashboardSummary {
        DashboardSummary::from_enrollments(self.list_enrollments(user_id).await)
    }

    /// Record a completed module. Idempotent.
    ///
    /// The write goes back to whichever tier held the record.
    pub async fn mark_module_complete(
        &self,
        user_id: &str,
        course_id: &str,
        module_id: &str,
    ) -> EnrollmentResult<Enrollment> {
        self.time.sleep(self.latency.progress).await;

        let LocatedEnrollment {
            tier,
            mut enrollment,
        } = self.locate(user_id, course_id).await?;

        let course = self.catalog.find_course(course_id);
        if let Some(course) = &course {
            if course.find_module(module_id).is_none() {
                return Err(EnrollmentError::ModuleNotFound {
                    course_id: course_id.to_string(),
                    module_id: module_id.to_string(),
                });
            }
        }

        if !enrollment.complete_module(module_id, course.as_ref()) {
            tracing::debug!(user_id, course_id, module_id, "Module already completed");
            return Ok(enrollment);
        }

        // Rewrite the holding tier's list with the updated record
        let mut records = self.store.read_tier(user_id, tier).await;
        match records.iter_mut().find(|e| e.course_id == course_id) {
            Some(existing) => *existing = enrollment.clone(),
            None => records.push(enrollment.clone()),
        }

        if !self.store.write_all(user_id, tier, &records).await {
            tracing::warn!(
                user_id,
                course_id,
                module_id,
                tier = %tier,
                "Failed to persist module progress"
            );
        }

        metrics::counter!("modules_completed_total").increment(1);
        if enrollment.is_completed {
            tracing::info!(user_id, course_id, "Course completed");
        }

        Ok(enrollment)
    }

    /// Module content, available to enrolled users only.
    pub async fn module_content(
        &self,
        user_id: &str,
        course_id: &str,
        module_id: &str,
    ) -> EnrollmentResult<Module> {
        let course = self
            .catalog
            .find_course(course_id)
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_id.to_string()))?;

        self.locate(user_id, course_id).await?;

        course
            .find_module(module_id)
            .cloned()
            .ok_or_else(|| EnrollmentError::ModuleNotFound {
                course_id: course_id.to_string(),
                module_id: module_id.to_string(),
            })
    }

    /// Record that the user exists with no enrollments yet.
    pub async fn initialize_user(&self, user_id: &str) -> bool {
        self.store.initialize_user(user_id).await
    }

    async fn locate(&self, user_id: &str, course_id: &str) -> EnrollmentResult<LocatedEnrollment> {
        self.store
            .find_one(user_id, course_id)
            .await
            .ok_or_else(|| EnrollmentError::NotEnrolled {
                course_id: course_id.to_string(),
            })
    }
}
