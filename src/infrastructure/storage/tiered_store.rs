use crate::domain::entities::Enrollment;
use crate::domain::errors::{EnrollmentError, EnrollmentResult};
use crate::domain::ports::enrollment_store::{
    EnrollmentStore, EnrollmentTier, LocatedEnrollment, StorageTier, TierSnapshot,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Store that prefers a durable tier and falls back to an ephemeral one.
///
/// Tier selection for whole-list reads is per user: once the durable tier
/// holds a key for the user (even an empty list) it is authoritative and the
/// ephemeral tier is not consulted. Single-record lookups are per record.
#[derive(Clone)]
pub struct TieredEnrollmentStore {
    durable: Arc<dyn EnrollmentTier>,
    ephemeral: Arc<dyn EnrollmentTier>,
}

impl TieredEnrollmentStore {
    pub fn new(durable: Arc<dyn EnrollmentTier>, ephemeral: Arc<dyn EnrollmentTier>) -> Self {
        Self { durable, ephemeral }
    }

    fn tier(&self, tier: StorageTier) -> &dyn EnrollmentTier {
        match tier {
            StorageTier::Durable => self.durable.as_ref(),
            StorageTier::Ephemeral => self.ephemeral.as_ref(),
        }
    }
}

#[async_trait]
impl EnrollmentStore for TieredEnrollmentStore {
    async fn read_all(&self, user_id: &str) -> TierSnapshot {
        match self.durable.read(user_id).await {
            Ok(Some(enrollments)) => {
                return TierSnapshot {
                    tier: StorageTier::Durable,
                    enrollments,
                };
            }
            Ok(None) => {
                tracing::debug!(user_id, "No durable enrollments, using ephemeral tier");
            }
            Err(e) => {
                tracing::warn!(user_id, "Durable tier unreadable, using ephemeral tier: {}", e);
            }
        }

        TierSnapshot {
            tier: StorageTier::Ephemeral,
            enrollments: self.ephemeral.read_all(user_id).await,
        }
    }

    async fn read_tier(&self, user_id: &str, tier: StorageTier) -> Vec<Enrollment> {
        self.tier(tier).read_all(user_id).await
    }

    async fn find_one(&self, user_id: &str, course_id: &str) -> Option<LocatedEnrollment> {
        for tier in [StorageTier::Durable, StorageTier::Ephemeral] {
            let found = self
                .read_tier(user_id, tier)
                .await
                .into_iter()
                .find(|e| e.course_id == course_id);

            if let Some(enrollment) = found {
                return Some(LocatedEnrollment { tier, enrollment });
            }
        }
        None
    }

    async fn write_all(
        &self,
        user_id: &str,
        tier: StorageTier,
        enrollments: &[Enrollment],
    ) -> bool {
        self.tier(tier).write_all(user_id, enrollments).await
    }

    async fn upsert_one(
        &self,
        user_id: &str,
        enrollment: &Enrollment,
    ) -> EnrollmentResult<StorageTier> {
        if self.durable.upsert_one(user_id, enrollment).await {
            return Ok(StorageTier::Durable);
        }

        tracing::warn!(
            user_id,
            course_id = %enrollment.course_id,
            "Failed to save enrollment to durable tier, using in-memory storage"
        );
        metrics::counter!("enrollment_fallback_writes_total").increment(1);

        if self.ephemeral.upsert_one(user_id, enrollment).await {
            return Ok(StorageTier::Ephemeral);
        }

        tracing::error!(
            user_id,
            course_id = %enrollment.course_id,
            "Both enrollment tiers refused the write"
        );
        Err(EnrollmentError::StorageUnavailable)
    }

    async fn initialize_user(&self, user_id: &str) -> bool {
        match self.durable.read(user_id).await {
            Ok(Some(_)) => true,
            Ok(None) => self.durable.write_all(user_id, &[]).await,
            Err(e) => {
                tracing::warn!(user_id, "Could not initialize durable enrollments: {}", e);
                false
            }
        }
    }
}
