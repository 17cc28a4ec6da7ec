//! HTTP API layer.
//!
//! Exposes the wallet store over HTTP next to the Discord bot. The router is
//! built separately from the listener so tests can exercise handlers without
//! binding a socket. State is the same [`AppContext`] the bot commands use.

/// HTTP route handlers
pub mod routes;

use crate::context::AppContext;
use crate::errors::{self, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Error type returned by HTTP handlers, mapped to status codes and JSON
/// bodies. Internal failures are logged server-side and never leak details
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Requested resource does not exist (404).
    NotFound(String),
    /// Any internal failure (500).
    Internal(errors::Error),
}

impl From<errors::Error> for ApiError {
    fn from(value: errors::Error) -> Self {
        ApiError::Internal(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(error) => {
                tracing::error!("Internal error handling request: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Builds the application router with all routes and middleware layers.
pub fn router(app_context: AppContext) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/wallets/:user_id",
            get(routes::get_wallet).post(routes::ensure_wallet),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_context)
}

/// Binds the listener and serves the API until the server shuts down.
pub async fn serve(bind_addr: &str, app_context: AppContext) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("HTTP server listening on http://{}", bind_addr);

    axum::serve(listener, router(app_context)).await?;
    Ok(())
}
