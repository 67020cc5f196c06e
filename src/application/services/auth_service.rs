use crate::{
    domain::entities::{Session, User, UserAccount, UserRole},
    domain::errors::{DomainError, DomainResult},
    domain::ports::session_repository::SessionRepository,
    domain::ports::user_repository::UserRepository,
    shared::utils::email_validator::validate_and_normalize_email,
};
use std::sync::Arc;

const MIN_PASSWORD_LEN: usize = 6;
// bcrypt ignores everything past 72 bytes
const MAX_PASSWORD_LEN: usize = 72;

/// Validates password length (6-72 bytes)
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.len() < MIN_PASSWORD_LEN || password.len() > MAX_PASSWORD_LEN {
        return Err(DomainError::ValidationError(format!(
            "Password must be {}-{} characters long",
            MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Hash a password with bcrypt off the async executor.
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::Internal(format!("Password hashing failed: {}", e)))
}

pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| DomainError::Internal(format!("Password verification failed: {}", e)))
}

/// A user together with a freshly issued session.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: User,
    pub session: Session,
}

/// Mock identity provider: accounts and sessions held in memory.
#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    session_duration_hours: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        session_duration_hours: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            session_duration_hours,
            bcrypt_cost,
        }
    }

    /// Register a new student account and sign it in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> DomainResult<AuthResult> {
        // 1. Validate input
        let email = validate_and_normalize_email(email)?;
        validate_password(password)?;
        let display_name = display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        // 2. Fail fast on a taken email before paying for a hash
        if self.user_repo.get_account_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict("Email already registered".to_string()));
        }

        // 3. Create account
        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        let user = self
            .user_repo
            .create_account(&email, display_name, UserRole::Student, password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Registered new student account");

        // 4. Sign in
        let session = self.issue_session(&user).await?;
        Ok(AuthResult { user, session })
    }

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let invalid = || DomainError::Unauthorized("Invalid email or password".to_string());

        let email = email.trim().to_lowercase();
        let UserAccount {
            user,
            password_hash,
        } = self
            .user_repo
            .get_account_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(password, &password_hash).await? {
            tracing::info!(user_id = %user.id, "Rejected login with wrong password");
            return Err(invalid());
        }

        let session = self.issue_session(&user).await?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AuthResult { user, session })
    }

    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.session_repo.delete_session(token).await
    }

    /// Resolve a session token to its user. Expired sessions are removed.
    pub async fn authenticate(&self, token: &str) -> DomainResult<Option<User>> {
        let Some(session) = self.session_repo.get_session_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete_session(token).await?;
            return Ok(None);
        }

        self.user_repo.get_user_by_id(&session.user_id).await
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repo.list_users().await
    }

    pub async fn cleanup_expired_sessions(&self) -> DomainResult<u64> {
        self.session_repo.cleanup_expired_sessions().await
    }

    async fn issue_session(&self, user: &User) -> DomainResult<Session> {
        let session = Session::new(user.id.clone(), self.session_duration_hours);
        self.session_repo.create_session(&session).await?;
        Ok(session)
    }
}
