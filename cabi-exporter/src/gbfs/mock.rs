//! In-process GBFS feed for testing without network access.
//!
//! Serves canned documents over real HTTP on a loopback port, so the
//! production client, resolvers and cache can be exercised end to end.
//! Every request is counted per resource.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::warn;

use super::client::FeedResource;

/// What the mock answers for one resource.
#[derive(Debug, Clone)]
enum MockResponse {
    Document(serde_json::Value),
    Failure(StatusCode),
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<FeedResource, MockResponse>,
    hits: HashMap<FeedResource, usize>,
}

/// A fake GBFS feed.
///
/// Clones share state, so documents can be swapped while the server runs.
#[derive(Debug, Clone, Default)]
pub struct MockFeed {
    state: Arc<Mutex<MockState>>,
}

impl MockFeed {
    /// Create a feed that answers 404 for every resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for `resource`.
    pub fn set(&self, resource: FeedResource, document: serde_json::Value) {
        self.lock()
            .responses
            .insert(resource, MockResponse::Document(document));
    }

    /// Answer requests for `resource` with a bare status code.
    pub fn fail(&self, resource: FeedResource, status: u16) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.lock()
            .responses
            .insert(resource, MockResponse::Failure(status));
    }

    /// Number of requests received for `resource`.
    pub fn hits(&self, resource: FeedResource) -> usize {
        self.lock().hits.get(&resource).copied().unwrap_or(0)
    }

    /// Start serving on an ephemeral loopback port.
    ///
    /// Returns the base URL to hand to
    /// [`GbfsConfig::with_base_url`](super::GbfsConfig::with_base_url).
    pub async fn serve(&self) -> std::io::Result<String> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let app = Router::new()
            .route("/:file", get(serve_document))
            .with_state(self.clone());

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!("mock feed stopped: {e}");
            }
        });

        Ok(format!("http://{addr}"))
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not cascade into every other request.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Start a listener that accepts connections but never answers.
///
/// Returns a base URL whose every request hangs until the client's own
/// timeout fires.
pub async fn serve_unresponsive() -> std::io::Result<String> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        // Keep accepted sockets open so the client sees a stall, not a reset.
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    Ok(format!("http://{addr}"))
}

async fn serve_document(State(feed): State<MockFeed>, Path(file): Path<String>) -> Response {
    let Some(resource) = FeedResource::from_file_name(&file) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut state = feed.lock();
    *state.hits.entry(resource).or_default() += 1;

    match state.responses.get(&resource) {
        Some(MockResponse::Document(document)) => Json(document.clone()).into_response(),
        Some(MockResponse::Failure(status)) => (*status, "mock failure").into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
