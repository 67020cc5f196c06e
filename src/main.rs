use medlecture::bootstrap;
use medlecture::config::Config;
use medlecture::infrastructure::http::router::{build_router, with_http_layers};
use medlecture::infrastructure::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    let _guard = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Build application state
    let state = bootstrap::build_app_state(&config).await?;
    let _cleanup = bootstrap::spawn_session_cleanup(state.auth_service.clone());

    // Build router
    let app = with_http_layers(build_router(state), &config.client_origin);

    // Start server
    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
