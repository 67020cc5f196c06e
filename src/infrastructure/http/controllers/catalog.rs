use crate::{
    domain::entities::CourseFilter,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

/// GET /api/courses?search=&category=&level=
pub async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Json<Value> {
    let courses = state.catalog_service.list_courses(&filter).await;
    Json(json!({ "courses": courses }))
}

/// GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let course = state.catalog_service.get_course(&course_id).await?;
    Ok(Json(json!({ "course": course })))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Value> {
    let categories = state.catalog_service.list_categories().await;
    Json(json!({ "categories": categories }))
}

/// GET /api/categories/:id/courses
pub async fn category_courses(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let (category, courses) = state
        .catalog_service
        .courses_in_category(&category_id)
        .await?;
    Ok(Json(json!({ "category": category, "courses": courses })))
}
