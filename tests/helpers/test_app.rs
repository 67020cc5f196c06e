use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use medlecture::bootstrap;
use medlecture::config::{Config, LatencyConfig};
use medlecture::infrastructure::http::middleware::AppState;
use medlecture::infrastructure::http::router::build_router;
use medlecture::infrastructure::runtime::ImmediateTimeService;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const STUDENT_EMAIL: &str = "student@medlecture.com";
pub const STUDENT_PASSWORD: &str = "student123";
pub const ADMIN_EMAIL: &str = "admin@medlecture.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub config: Config,
    _dir: Option<TempDir>,
}

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        data_dir: data_dir.to_path_buf(),
        enrollments_region: "medlecture_enrollments".to_string(),
        seed_demo_enrollments: true,
        session_duration_hours: 24,
        // Lowest cost bcrypt accepts
        bcrypt_cost: 4,
        client_origin: "http://localhost:5173".to_string(),
        latency: LatencyConfig::none(),
        otel_exporter_endpoint: None,
        service_name: "medlecture-test".to_string(),
        metrics_enabled: false,
        metrics_port: 9000,
    }
}

pub async fn setup_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut app = setup_test_app_in(dir.path()).await;
    app._dir = Some(dir);
    app
}

/// App over an existing data directory, as after a process restart.
pub async fn setup_test_app_in(data_dir: &Path) -> TestApp {
    let config = test_config(data_dir);

    let state = bootstrap::build_app_state_with(&config, Arc::new(ImmediateTimeService::new()))
        .await
        .expect("Failed to build app state");
    let router = build_router(state.clone());

    TestApp {
        router,
        state,
        config,
        _dir: None,
    }
}

impl TestApp {
    /// Send a request, returning the status and the JSON body (Null if empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(build_request(Method::GET, uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(build_request(Method::POST, uri, token, Some(body)))
            .await
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["token"]
            .as_str()
            .expect("login response should carry a token")
            .to_string()
    }

    /// Register a fresh student and return (user id, token).
    pub async fn register(&self, email: &str) -> (String, String) {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({
                    "email": email,
                    "password": "password123",
                    "displayName": "New Student"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        (
            body["user"]["id"].as_str().unwrap().to_string(),
            body["token"].as_str().unwrap().to_string(),
        )
    }
}

pub fn build_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
