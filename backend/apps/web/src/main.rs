//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `todos::TodoError` rendered through `kernel::error::AppError`.

mod settings;

use std::time::Duration;

use tokio::net::TcpListener;
use todos::MemoryStore;
use todos::domain::repository::SessionRepository;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,todos=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let store = MemoryStore::new();

    // Startup cleanup: nothing is persisted yet, but the sweep runs the
    // same path the periodic task does
    sweep_sessions(&store).await;
    spawn_session_cleanup(store.clone(), settings.cleanup_interval);

    let app = todos::todo_router(store, settings.todo).layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Errors here should not stop the server
async fn sweep_sessions(store: &MemoryStore) {
    match store.cleanup_expired().await {
        Ok(sessions) => {
            tracing::debug!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }
}

fn spawn_session_cleanup(store: MemoryStore, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            sweep_sessions(&store).await;
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
