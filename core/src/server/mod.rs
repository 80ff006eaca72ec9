//! HTTP server exposing the classifier at `POST /file`.
//! Request validation lives in the extractor; the classifier only ever
//! sees a well-formed string.

pub mod config;
mod error;
mod extractors;
mod handlers;
mod middleware;
mod router;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::build_router;

use crate::error::AppError;
use log::{error, info};
use tokio::net::TcpListener;

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::bind(addr.to_string(), e.to_string()))?;
    serve(listener).await
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr()?;
    info!("Listening on http://{addr}");

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving rather than exit at once.
        error!("Failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
