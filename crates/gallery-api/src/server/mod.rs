//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use gallery_common::{AppConfig, AppError, AppResult};
use gallery_db::{
    create_pool, ensure_schema, PgCommentRepository, PgHealthCheck, PgLikeRepository, PoolConfig,
};
use gallery_provider::UnsplashClient;
use gallery_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    router.with_state(state)
}

/// Connect to the store and the provider, and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.ensure_schema {
        ensure_schema(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    if !config.provider.has_access_key() {
        warn!("UNSPLASH_ACCESS_KEY is not set; image requests will likely be rejected");
    }
    let provider = UnsplashClient::from_config(&config.provider)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    info!(base_url = %provider.base_url(), "Image provider configured");

    let service_context = ServiceContext::builder()
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .health_check(Arc::new(PgHealthCheck::new(pool)))
        .image_provider(Arc::new(provider))
        .images_config(config.images.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Bind `addr` and serve until Ctrl+C
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}"), e))?;

    serve(listener, app).await
}

/// Serve on an already bound listener until Ctrl+C
pub async fn serve(listener: TcpListener, app: Router) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server("HTTP server stopped unexpectedly", e))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler, never resolve
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
