//! GBFS client error types.

/// Errors fetching or decoding an upstream feed resource.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed (connection refused, timeout, truncated body, etc.)
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Feed returned a non-success status code
    #[error("feed error {status} from {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// Response body was not the expected JSON document
    #[error("JSON parse error for {url}: {message}")]
    Json { url: String, message: String },
}
