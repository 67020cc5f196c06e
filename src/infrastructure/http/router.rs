use crate::infrastructure::http::controllers as api;
use crate::infrastructure::http::middleware::{require_auth, AppState};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    // Build protected routes (require a session)
    let protected = Router::new()
        .route("/api/auth/logout", post(api::auth::logout))
        .route("/api/auth/me", get(api::auth::me))
        .route("/api/dashboard", get(api::enrollments::dashboard))
        .route(
            "/api/enrollments",
            get(api::enrollments::list_enrollments).post(api::enrollments::enroll),
        )
        .route(
            "/api/courses/:id/enrollment",
            get(api::enrollments::enrollment_status),
        )
        .route(
            "/api/courses/:id/modules/:module_id",
            get(api::enrollments::module_content),
        )
        .route(
            "/api/courses/:id/modules/:module_id/complete",
            post(api::enrollments::complete_module),
        )
        .route("/api/checkout", post(api::checkout::checkout))
        .route("/api/admin/users", get(api::admin::list_users))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    // Build public routes
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/auth/register", post(api::auth::register))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/courses", get(api::catalog::list_courses))
        .route("/api/courses/:id", get(api::catalog::get_course))
        .route("/api/categories", get(api::catalog::list_categories))
        .route(
            "/api/categories/:id/courses",
            get(api::catalog::category_courses),
        )
        .merge(protected)
        .with_state(state)
}

/// Wrap the router with request tracing and CORS for the SPA origin.
pub fn with_http_layers(router: Router, client_origin: &str) -> Router {
    let router = router.layer(TraceLayer::new_for_http());

    match HeaderValue::from_str(client_origin) {
        Ok(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        ),
        Err(_) => {
            tracing::warn!(client_origin, "Invalid CLIENT_ORIGIN, CORS disabled");
            router
        }
    }
}

async fn root_handler() -> &'static str {
    "MedLecture Course Service"
}

async fn health_handler() -> &'static str {
    "OK"
}
