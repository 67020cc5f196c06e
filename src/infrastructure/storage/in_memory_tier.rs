use crate::domain::entities::Enrollment;
use crate::domain::errors::StorageError;
use crate::domain::ports::enrollment_store::{EnrollmentTier, StorageTier};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

/// Ephemeral tier: lives as long as the instance that owns it.
#[derive(Default)]
pub struct InMemoryTier {
    entries: RwLock<HashMap<String, Vec<Enrollment>>>,
}

impl InMemoryTier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tier pre-populated with the given records, grouped by user.
    pub fn with_enrollments(enrollments: impl IntoIterator<Item = Enrollment>) -> Self {
        let mut entries: HashMap<String, Vec<Enrollment>> = HashMap::new();
        for enrollment in enrollments {
            entries
                .entry(enrollment.user_id.clone())
                .or_default()
                .push(enrollment);
        }
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Tier seeded with the demo student's two sample enrollments.
    pub fn seeded_with_demo_data() -> Self {
        Self::with_enrollments(demo_enrollments())
    }
}

#[async_trait]
impl EnrollmentTier for InMemoryTier {
    fn kind(&self) -> StorageTier {
        StorageTier::Ephemeral
    }

    async fn read(&self, user_id: &str) -> Result<Option<Vec<Enrollment>>, StorageError> {
        Ok(self.entries.read().await.get(user_id).cloned())
    }

    async fn write(&self, user_id: &str, enrollments: &[Enrollment]) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(user_id.to_string(), enrollments.to_vec());
        Ok(())
    }
}

/// Sample enrollments for the demo student (user "2"): course "1" with its
/// first module done, and course "2" untouched.
pub fn demo_enrollments() -> Vec<Enrollment> {
    let now = Utc::now();
    vec![
        Enrollment {
            id: "1".to_string(),
            user_id: "2".to_string(),
            course_id: "1".to_string(),
            course_name: "Human Anatomy Fundamentals".to_string(),
            enrollment_date: now,
            completed_modules: BTreeSet::from(["m1".to_string()]),
            is_completed: false,
        },
        Enrollment {
            id: "2".to_string(),
            user_id: "2".to_string(),
            course_id: "2".to_string(),
            course_name: "Advanced Cardiovascular Physiology".to_string(),
            enrollment_date: now,
            completed_modules: BTreeSet::new(),
            is_completed: false,
        },
    ]
}
