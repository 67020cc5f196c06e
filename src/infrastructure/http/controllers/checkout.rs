use crate::{
    application::services::CheckoutReceipt,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState, AuthenticatedUser},
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub course_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub receipt: CheckoutReceipt,
}

/// POST /api/checkout - Simulated payment followed by enrollment
pub async fn checkout(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CheckoutRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let receipt = state
        .checkout_service
        .checkout(&auth_user.user.id, &request.course_id)
        .await
        .ok_or_else(|| {
            ApiError::BadRequest("Payment could not be completed. Please try again.".to_string())
        })?;

    Ok(Json(CheckoutResponse {
        success: true,
        message: "Enrollment successful".to_string(),
        receipt,
    }))
}
