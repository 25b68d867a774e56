//! Web layer for the exporter.
//!
//! Serves `/health` and the Prometheus scrape endpoint `/metrics`.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
