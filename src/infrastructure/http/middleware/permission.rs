use crate::{
    domain::entities::UserRole,
    infrastructure::http::middleware::{auth::AuthenticatedUser, error::ApiError},
};

/// Authorization is a plain role comparison.
pub fn require_role(auth_user: &AuthenticatedUser, role: UserRole) -> Result<(), ApiError> {
    if auth_user.user.role != role {
        tracing::debug!(
            user_id = %auth_user.user.id,
            required = role.as_str(),
            actual = auth_user.user.role.as_str(),
            "Role check failed"
        );
        return Err(ApiError::Forbidden(
            "Forbidden: Insufficient permissions".to_string(),
        ));
    }
    Ok(())
}
