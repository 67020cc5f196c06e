use crate::{
    domain::entities::{UserListResponse, UserRole},
    infrastructure::http::middleware::{require_role, ApiResult, AppState, AuthenticatedUser},
};
use axum::{extract::State, Extension, Json};

/// GET /api/admin/users - All accounts, admins only
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserListResponse>> {
    require_role(&auth_user, UserRole::Admin)?;

    let users = state.auth_service.list_users().await?;
    Ok(Json(UserListResponse { users }))
}
