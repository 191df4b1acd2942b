//! Regatta API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # In-memory store on 0.0.0.0:8080
//! cargo run --bin regatta-api
//!
//! # PostgreSQL store, JSON logs
//! REGATTA_DATABASE_URL=postgres://... REGATTA_LOG_FORMAT=json cargo run --bin regatta-api
//! ```
//!
//! # Environment Variables
//!
//! * `REGATTA_HOST` - Server host (default: 0.0.0.0)
//! * `REGATTA_PORT` - Server port (default: 8080)
//! * `REGATTA_DATABASE_URL` - PostgreSQL connection string (default: unset, in-memory store)
//! * `REGATTA_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `REGATTA_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `REGATTA_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::DocumentStore;
use domain_regatta::RegattaService;
use infra_store::{
    create_pool, MemoryDocumentStore, PoolConfig, PostgresDocumentStore, TracingAnalyticsSink,
};
use interface_api::{
    config::{ApiConfig, LogFormat},
    create_router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Invalid REGATTA_* configuration")?;

    init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Regatta API Server"
    );

    let store = build_store(&config).await?;
    let service = RegattaService::new(store, Arc::new(TracingAnalyticsSink::new()));
    let app = create_router(AppState::new(service, config.clone()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Installs the tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// PostgreSQL when a database URL is configured, memory otherwise
async fn build_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match &config.database_url {
        Some(url) => {
            let pool_config = PoolConfig::new(url.clone()).max_connections(config.max_connections);
            let pool = create_pool(&pool_config)
                .await
                .context("Failed to connect to database")?;
            let store = PostgresDocumentStore::new(pool);
            store
                .ensure_schema()
                .await
                .context("Failed to prepare document schema")?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("No database configured; records are kept in memory");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
