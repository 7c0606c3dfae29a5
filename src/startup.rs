//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::database;
use crate::presentation::http::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Open the pool and bring the schema up to date.
    pub async fn initialize(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to open database pool")?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        Ok(Self {
            db,
            settings: Arc::new(settings),
        })
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let addr = settings
            .server
            .socket_addr()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;

        let state = AppState::initialize(settings).await?;
        let router = routes::create_router(state.clone());

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            state,
        })
    }

    /// Run the server until stopped, then close the pool
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.state.db.close().await;
        tracing::info!("Database pool closed");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
