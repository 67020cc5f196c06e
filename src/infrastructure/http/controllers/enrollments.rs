use crate::{
    domain::entities::{DashboardSummary, Enrollment, EnrollmentStatus, User},
    infrastructure::http::middleware::{ApiResult, AppState, AuthenticatedUser},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub course_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user: User,
    #[serde(flatten)]
    pub summary: DashboardSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatusResponse {
    pub course_id: String,
    pub enrolled: bool,
    pub status: EnrollmentStatus,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

/// GET /api/dashboard - Enrollments with course data and progress counts
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Json<DashboardResponse> {
    let summary = state.enrollment_service.dashboard(&auth_user.user.id).await;
    Json(DashboardResponse {
        user: auth_user.user,
        summary,
    })
}

/// GET /api/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Json<Value> {
    let enrollments = state
        .enrollment_service
        .list_enrollments(&auth_user.user.id)
        .await;
    Json(json!({ "enrollments": enrollments }))
}

/// POST /api/enrollments - Enroll without going through checkout
pub async fn enroll(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<EnrollRequest>,
) -> ApiResult<(StatusCode, Json<EnrollmentResponse>)> {
    let enrollment = state
        .enrollment_service
        .enroll(&auth_user.user.id, &request.course_id)
        .await?;

    Ok((StatusCode::CREATED, Json(EnrollmentResponse { enrollment })))
}

/// GET /api/courses/:id/enrollment
pub async fn enrollment_status(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(course_id): Path<String>,
) -> Json<EnrollmentStatusResponse> {
    let status = state
        .enrollment_service
        .enrollment_status(&auth_user.user.id, &course_id)
        .await;

    Json(EnrollmentStatusResponse {
        enrolled: status != EnrollmentStatus::NotEnrolled,
        course_id,
        status,
    })
}

/// GET /api/courses/:id/modules/:module_id - Module content for enrolled users
pub async fn module_content(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((course_id, module_id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let module = state
        .enrollment_service
        .module_content(&auth_user.user.id, &course_id, &module_id)
        .await?;
    Ok(Json(json!({ "module": module })))
}

/// POST /api/courses/:id/modules/:module_id/complete
pub async fn complete_module(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((course_id, module_id)): Path<(String, String)>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = state
        .enrollment_service
        .mark_module_complete(&auth_user.user.id, &course_id, &module_id)
        .await?;
    Ok(Json(EnrollmentResponse { enrollment }))
}
