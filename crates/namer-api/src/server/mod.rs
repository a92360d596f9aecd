//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use namer_common::{AppConfig, AppError, AppResult, StorageBackend};
use namer_db::{create_pool, run_migrations};
use namer_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.storage {
        StorageBackend::Postgres => {
            if config.database.url.is_empty() {
                return Err(AppError::Config(
                    "DATABASE_URL is required for the postgres backend".to_string(),
                ));
            }

            info!("Connecting to PostgreSQL...");
            let db_config = namer_db::DatabaseConfig::from(&config.database);
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            ServiceContext::postgres(pool)
        }
        StorageBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            ServiceContext::in_memory()
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener.local_addr()?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr).await?;

    run_server(app, listener).await
}
