use crate::domain::entities::{User, UserAccount, UserRole};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::user_repository::UserRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local account directory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<Vec<UserAccount>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_account_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone()))
    }

    async fn list_users(&self) -> DomainResult<Vec<User>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn create_account(
        &self,
        email: &str,
        display_name: Option<String>,
        role: UserRole,
        password_hash: String,
    ) -> DomainResult<User> {
        // Check and insert under one lock so two registrations cannot share an email
        let mut accounts = self.accounts.write().await;

        if accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(DomainError::Conflict("Email already registered".to_string()));
        }

        // Enrollment regions outlive this directory, so ids must never be reused
        let user = User {
            id: Uuid::now_v7().to_string(),
            email: email.to_string(),
            display_name,
            role,
        };

        accounts.push(UserAccount {
            user: user.clone(),
            password_hash,
        });

        Ok(user)
    }
}
