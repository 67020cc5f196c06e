use crate::application::services::auth_service::hash_password;
use crate::application::services::{
    AuthService, CatalogService, CheckoutService, EnrollmentService,
};
use crate::config::Config;
use crate::domain::entities::{User, UserAccount, UserRole};
use crate::domain::ports::catalog::CourseCatalog;
use crate::domain::ports::enrollment_store::{EnrollmentStore, EnrollmentTier};
use crate::domain::ports::session_repository::SessionRepository;
use crate::domain::ports::time_service::TimeService;
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::{
    InMemorySessionRepository, InMemoryUserRepository, StaticCatalog,
};
use crate::infrastructure::runtime::TokioTimeService;
use crate::infrastructure::storage::{InMemoryTier, JsonFileTier, TieredEnrollmentStore};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Demo accounts: (id, email, password, display name, role)
const SEED_ACCOUNTS: [(&str, &str, &str, &str, UserRole); 3] = [
    ("1", "admin@medlecture.com", "admin123", "Admin User", UserRole::Admin),
    ("2", "student@medlecture.com", "student123", "Student User", UserRole::Student),
    ("3", "instructor@medlecture.com", "instructor123", "Instructor User", UserRole::Instructor),
];

/// Build application state with real simulated latency.
pub async fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    build_app_state_with(config, Arc::new(TokioTimeService::new())).await
}

/// Build application state around an injected time service.
pub async fn build_app_state_with(
    config: &Config,
    time: Arc<dyn TimeService>,
) -> anyhow::Result<AppState> {
    // Catalog
    let catalog: Arc<dyn CourseCatalog> =
        Arc::new(StaticCatalog::builtin().context("Failed to load built-in catalog")?);
    tracing::info!(courses = catalog.all_courses().len(), "Catalog loaded");

    // Enrollment tiers
    let durable: Arc<dyn EnrollmentTier> = Arc::new(JsonFileTier::new(config.enrollments_path()));
    let ephemeral: Arc<dyn EnrollmentTier> = if config.seed_demo_enrollments {
        Arc::new(InMemoryTier::seeded_with_demo_data())
    } else {
        Arc::new(InMemoryTier::new())
    };
    let store: Arc<dyn EnrollmentStore> = Arc::new(TieredEnrollmentStore::new(durable, ephemeral));
    tracing::info!(
        path = %config.enrollments_path().display(),
        seeded = config.seed_demo_enrollments,
        "Enrollment store initialized"
    );

    // Identity
    let user_repo: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository::with_accounts(
            seed_accounts(config.bcrypt_cost).await?,
        ));
    let session_repo: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    // Services
    let auth_service = AuthService::new(
        user_repo,
        session_repo,
        config.session_duration_hours,
        config.bcrypt_cost,
    );
    let catalog_service = CatalogService::new(catalog.clone(), time.clone(), config.latency);
    let enrollment_service =
        EnrollmentService::new(store, catalog, time.clone(), config.latency);
    let checkout_service =
        CheckoutService::new(enrollment_service.clone(), time, config.latency);

    Ok(AppState {
        auth_service,
        catalog_service,
        enrollment_service,
        checkout_service,
    })
}

async fn seed_accounts(bcrypt_cost: u32) -> anyhow::Result<Vec<UserAccount>> {
    let mut accounts = Vec::with_capacity(SEED_ACCOUNTS.len());

    for (id, email, password, display_name, role) in SEED_ACCOUNTS {
        let password_hash = hash_password(password, bcrypt_cost)
            .await
            .with_context(|| format!("Failed to hash seed password for {}", email))?;

        accounts.push(UserAccount {
            user: User {
                id: id.to_string(),
                email: email.to_string(),
                display_name: Some(display_name.to_string()),
                role,
            },
            password_hash,
        });
    }

    tracing::info!(count = accounts.len(), "Seed accounts created");
    Ok(accounts)
}

/// Periodically drop expired sessions.
pub fn spawn_session_cleanup(auth_service: AuthService) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match auth_service.cleanup_expired_sessions().await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "Expired sessions removed"),
                Err(e) => tracing::warn!("Session cleanup failed: {}", e),
            }
        }
    })
}
