//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error};

use crate::metrics::MetricsError;
use crate::stations::RefreshError;

use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Refresh the station snapshot (through the cache) and render gauges.
async fn metrics(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.snapshots.get().await?;
    let body = state.metrics.publish(&snapshot).await?;

    Ok((
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        body,
    )
        .into_response())
}

/// Application error type.
///
/// Any failure surfaces as a bare 500; partial metrics are never sent.
#[derive(Debug)]
pub enum AppError {
    Refresh(Arc<RefreshError>),
    Render(MetricsError),
}

impl From<Arc<RefreshError>> for AppError {
    fn from(e: Arc<RefreshError>) -> Self {
        AppError::Refresh(e)
    }
}

impl From<MetricsError> for AppError {
    fn from(e: MetricsError) -> Self {
        AppError::Render(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Refresh(e) => error!("Error serving metrics: {e}"),
            AppError::Render(e) => error!("Error rendering metrics: {e}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Error collecting metrics").into_response()
    }
}
