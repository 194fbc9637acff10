//! Vidio server: community audio archive.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use vidio_core::config::AppConfig;
use vidio_core::error::AppError;
use vidio_database::Repositories;
use vidio_service::AllowlistService;
use vidio_storage::LocalStorageProvider;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/default.toml`, the `VIDIO_ENV` overlay,
/// and `VIDIO__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("VIDIO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Vidio v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Payload storage ──────────────────────────────────
    tracing::info!(media_root = %config.storage.media_root, "Initializing storage...");
    let storage = LocalStorageProvider::new(&config.storage.media_root).await?;

    // ── Step 2: Record store + migrations ────────────────────────
    tracing::info!(provider = ?config.database.provider, "Connecting to record store...");
    let repos = Repositories::connect(&config.database).await?;

    // ── Step 3: Seed the admin allowlist ─────────────────────────
    let inserted = AllowlistService::new(Arc::clone(&repos.admin_allowlist))
        .seed(&config.registration.admin_allowlist)
        .await?;
    tracing::info!(
        configured = config.registration.admin_allowlist.len(),
        inserted,
        "Admin allowlist seeded"
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let pool = repos.pool.clone();

    let state = vidio_api::AppState::new(config, repos, Arc::new(storage));
    let app = vidio_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Vidio server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(pool) = pool {
        if tokio::time::timeout(grace, pool.close()).await.is_err() {
            tracing::warn!("Timed out closing database pool");
        }
    }

    tracing::info!("Vidio server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
