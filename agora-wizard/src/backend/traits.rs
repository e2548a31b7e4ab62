//! Core trait for graph service backends.
//!
//! The wizard never talks to the graph service directly - it goes through
//! the `GraphBackend` trait so hosts can inject the real REST client, a
//! mock, or anything else that can answer existence checks and create
//! nodes.

use async_trait::async_trait;

use graph_model::{NodeKind, NodeRef};

/// Error types for graph service operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Backend is not reachable
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// No node matched the lookup. Treated as "proceed", not a failure.
    #[error("No matching node")]
    NotFound,

    /// Request reached the service but failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The call exceeded the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),
}

impl BackendError {
    /// Whether this error is the "no match" signal from a lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Core trait for graph service backends.
#[async_trait]
pub trait GraphBackend: Send + Sync {
    /// Backend identifier for logs.
    fn id(&self) -> &str;

    /// Check if the backend is currently reachable.
    async fn is_available(&self) -> bool;

    /// Look up an existing node of the given kind by its text.
    ///
    /// `Ok(None)` and `Err(NotFound)` both mean "no match".
    async fn check_exists(
        &self,
        kind: NodeKind,
        text: &str,
    ) -> Result<Option<NodeRef>, BackendError>;

    /// Create a node from the kind-relevant draft payload.
    async fn create_node(
        &self,
        kind: NodeKind,
        payload: serde_json::Value,
    ) -> Result<NodeRef, BackendError>;
}
