use crate::{
    application::services::{AuthService, CatalogService, CheckoutService, EnrollmentService},
    domain::entities::User,
    infrastructure::http::middleware::error::ApiError,
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

pub const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub enrollment_service: EnrollmentService,
    pub checkout_service: CheckoutService,
}

/// The signed-in user, attached to the request by `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Resolve the session from the `session` cookie or a Bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(&request).ok_or(ApiError::Unauthorized)?;

    let user = state
        .auth_service
        .authenticate(&token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user, token });

    Ok(next.run(request).await)
}

fn session_token(request: &Request) -> Option<String> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    bearer.or_else(|| {
        CookieJar::from_headers(request.headers())
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}
