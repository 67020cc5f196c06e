use crate::domain::entities::Enrollment;
use crate::domain::errors::{EnrollmentResult, StorageError};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Which backend holds a user's (or a record's) enrollments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    /// Best-effort durable key-value region
    Durable,
    /// Process-lifetime fallback
    Ephemeral,
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTier::Durable => write!(f, "durable"),
            StorageTier::Ephemeral => write!(f, "ephemeral"),
        }
    }
}

/// A keyed region mapping user ids to their enrollment lists.
///
/// Implementors provide the raw `read`/`write`; the provided methods add the
/// never-fail read, boolean write, and replace-or-append semantics callers
/// rely on.
#[async_trait]
pub trait EnrollmentTier: Send + Sync {
    fn kind(&self) -> StorageTier;

    /// `Ok(None)` means the user has no key in the region.
    async fn read(&self, user_id: &str) -> Result<Option<Vec<Enrollment>>, StorageError>;

    /// Overwrite the user's list.
    async fn write(&self, user_id: &str, enrollments: &[Enrollment]) -> Result<(), StorageError>;

    /// Read the user's list, substituting an empty one on any fault.
    async fn read_all(&self, user_id: &str) -> Vec<Enrollment> {
        match self.read(user_id).await {
            Ok(enrollments) => enrollments.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(tier = %self.kind(), user_id, "Failed to read enrollments: {}", e);
                Vec::new()
            }
        }
    }

    async fn write_all(&self, user_id: &str, enrollments: &[Enrollment]) -> bool {
        match self.write(user_id, enrollments).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(tier = %self.kind(), user_id, "Failed to write enrollments: {}", e);
                false
            }
        }
    }

    /// Replace-or-append by course id. A replaced record keeps its id and
    /// progress; only the course name and enrollment date are refreshed.
    ///
    /// Read-modify-write without atomicity.
    async fn upsert_one(&self, user_id: &str, enrollment: &Enrollment) -> bool {
        let mut current = match self.read(user_id).await {
            Ok(enrollments) => enrollments.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(tier = %self.kind(), user_id, "Failed to read before upsert: {}", e);
                return false;
            }
        };

        match current
            .iter_mut()
            .find(|e| e.course_id == enrollment.course_id)
        {
            Some(existing) => {
                existing.course_name = enrollment.course_name.clone();
                existing.enrollment_date = enrollment.enrollment_date;
            }
            None => current.push(enrollment.clone()),
        }

        self.write_all(user_id, &current).await
    }
}

/// A user's enrollments together with the tier they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSnapshot {
    pub tier: StorageTier,
    pub enrollments: Vec<Enrollment>,
}

impl TierSnapshot {
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_id == course_id)
    }
}

/// A single record and the tier that holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedEnrollment {
    pub tier: StorageTier,
    pub enrollment: Enrollment,
}

/// Store interface the enrollment service depends on. Storage faults are
/// recovered behind this trait.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Per-user tier selection. Never fails.
    async fn read_all(&self, user_id: &str) -> TierSnapshot;

    /// The user's list in one specific tier. Never fails.
    async fn read_tier(&self, user_id: &str, tier: StorageTier) -> Vec<Enrollment>;

    /// Per-record lookup: durable first, then ephemeral.
    async fn find_one(&self, user_id: &str, course_id: &str) -> Option<LocatedEnrollment>;

    /// Overwrite the user's list in the given tier.
    async fn write_all(&self, user_id: &str, tier: StorageTier, enrollments: &[Enrollment])
        -> bool;

    /// Commit one record, preferring the durable tier. Returns the tier that
    /// accepted it.
    async fn upsert_one(&self, user_id: &str, enrollment: &Enrollment)
        -> EnrollmentResult<StorageTier>;

    /// Mark the user as known to the durable tier with an explicit empty list,
    /// so that "no enrollments" is not mistaken for "no data".
    async fn initialize_user(&self, user_id: &str) -> bool;
}
