//! REST surface: `/api/v0/diet/` routes over a shared [`DietStore`].

pub mod handlers;
pub mod response;
pub mod state;

use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v0/diet/",
            post(handlers::post_records).get(handlers::get_records),
        )
        .route(
            "/api/v0/diet/{id}",
            get(handlers::get_record)
                .put(handlers::put_record)
                .delete(handlers::delete_record),
        )
        .with_state(state)
}

/// Serve until Ctrl+C / SIGTERM, then close the store.
pub async fn serve(store: DietStore, cfg: &Config) -> AppResult<()> {
    let state = AppState::new(store, cfg.window_days);
    let app = router(state.clone());

    let address = format!("{}:{}", cfg.bind, cfg.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    match Arc::try_unwrap(state).ok().and_then(AppState::into_store) {
        Some(store) => store.close()?,
        None => warn!("store still referenced at shutdown, dropping it"),
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
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
