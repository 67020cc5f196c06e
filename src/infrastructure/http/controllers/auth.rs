use crate::{
    application::services::AuthResult,
    domain::entities::{AuthResponse, LoginRequest, RegisterRequest, UserResponse},
    infrastructure::http::middleware::{ApiResult, AppState, AuthenticatedUser, SESSION_COOKIE},
};
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{json, Value};

/// POST /api/auth/register - Create a student account and sign it in
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    let auth_result = state
        .auth_service
        .register(&request.email, &request.password, request.display_name)
        .await?;

    // Known to the durable tier from the start, so an empty dashboard is
    // never mistaken for missing data
    if !state
        .enrollment_service
        .initialize_user(&auth_result.user.id)
        .await
    {
        tracing::warn!(
            user_id = %auth_result.user.id,
            "Could not initialize enrollment storage for new user"
        );
    }

    let (jar, body) = signed_in(jar, auth_result);
    Ok((StatusCode::CREATED, jar, body))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let auth_result = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(signed_in(jar, auth_result))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<(CookieJar, Json<Value>)> {
    state.auth_service.logout(&auth_user.token).await?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, Json(json!({ "message": "Logged out successfully" }))))
}

/// GET /api/auth/me
pub async fn me(
    axum::Extension(auth_user): axum::Extension<AuthenticatedUser>,
) -> Json<UserResponse> {
    Json(UserResponse {
        user: auth_user.user,
    })
}

fn signed_in(jar: CookieJar, auth_result: AuthResult) -> (CookieJar, Json<AuthResponse>) {
    let AuthResult { user, session } = auth_result;

    let cookie = Cookie::build((SESSION_COOKIE, session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let body = AuthResponse {
        token: session.token,
        expires_at: session.expires_at.to_rfc3339(),
        user,
    };

    (jar.add(cookie), Json(body))
}
