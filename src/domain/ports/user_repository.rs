use crate::domain::entities::{User, UserAccount, UserRole};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_account_by_email(&self, email: &str) -> DomainResult<Option<UserAccount>>;
    async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    async fn list_users(&self) -> DomainResult<Vec<User>>;
    /// Create an account and assign the next sequential id.
    /// Fails with `Conflict` when the email is taken.
    async fn create_account(
        &self,
        email: &str,
        display_name: Option<String>,
        role: UserRole,
        password_hash: String,
    ) -> DomainResult<User>;
}
