use async_trait::async_trait;
use medlecture::application::services::{CheckoutService, EnrollmentService};
use medlecture::config::LatencyConfig;
use medlecture::domain::entities::Enrollment;
use medlecture::domain::errors::StorageError;
use medlecture::domain::ports::enrollment_store::{EnrollmentStore, EnrollmentTier, StorageTier};
use medlecture::infrastructure::persistence::StaticCatalog;
use medlecture::infrastructure::runtime::ImmediateTimeService;
use medlecture::infrastructure::storage::{InMemoryTier, JsonFileTier, TieredEnrollmentStore};
use std::sync::Arc;
use tempfile::TempDir;

/// Tier that refuses every read and write.
pub struct FailingTier(pub StorageTier);

#[async_trait]
impl EnrollmentTier for FailingTier {
    fn kind(&self) -> StorageTier {
        self.0
    }

    async fn read(&self, _user_id: &str) -> Result<Option<Vec<Enrollment>>, StorageError> {
        Err(StorageError::Disabled)
    }

    async fn write(&self, _user_id: &str, _enrollments: &[Enrollment]) -> Result<(), StorageError> {
        Err(StorageError::Disabled)
    }
}

/// Durable tier in a temp directory plus an ephemeral tier.
pub struct TestStore {
    pub dir: TempDir,
    pub durable: Arc<JsonFileTier>,
    pub ephemeral: Arc<InMemoryTier>,
    pub store: Arc<TieredEnrollmentStore>,
}

impl TestStore {
    pub fn enrollment_service(&self) -> EnrollmentService {
        enrollment_service(self.store.clone())
    }
}

pub fn setup_store() -> TestStore {
    setup_store_with_ephemeral(InMemoryTier::new())
}

/// Ephemeral tier pre-loaded with the demo student's records.
pub fn setup_seeded_store() -> TestStore {
    setup_store_with_ephemeral(InMemoryTier::seeded_with_demo_data())
}

fn setup_store_with_ephemeral(ephemeral: InMemoryTier) -> TestStore {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let durable = Arc::new(JsonFileTier::new(
        dir.path().join("medlecture_enrollments.json"),
    ));
    let ephemeral = Arc::new(ephemeral);
    let store = Arc::new(TieredEnrollmentStore::new(
        durable.clone(),
        ephemeral.clone(),
    ));

    TestStore {
        dir,
        durable,
        ephemeral,
        store,
    }
}

/// Store whose durable tier is unavailable.
pub fn setup_store_without_durable() -> (Arc<InMemoryTier>, Arc<TieredEnrollmentStore>) {
    let ephemeral = Arc::new(InMemoryTier::new());
    let store = Arc::new(TieredEnrollmentStore::new(
        Arc::new(FailingTier(StorageTier::Durable)),
        ephemeral.clone(),
    ));
    (ephemeral, store)
}

/// Store where neither tier accepts anything.
pub fn setup_broken_store() -> Arc<TieredEnrollmentStore> {
    Arc::new(TieredEnrollmentStore::new(
        Arc::new(FailingTier(StorageTier::Durable)),
        Arc::new(FailingTier(StorageTier::Ephemeral)),
    ))
}

pub fn enrollment_service(store: Arc<dyn EnrollmentStore>) -> EnrollmentService {
    EnrollmentService::new(
        store,
        Arc::new(StaticCatalog::builtin().expect("Built-in catalog should parse")),
        Arc::new(ImmediateTimeService::new()),
        LatencyConfig::none(),
    )
}

pub fn checkout_service(enrollment_service: EnrollmentService) -> CheckoutService {
    CheckoutService::new(
        enrollment_service,
        Arc::new(ImmediateTimeService::new()),
        LatencyConfig::none(),
    )
}
