//! Mock graph backend for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use graph_model::{NodeKind, NodeRef};

use super::traits::{BackendError, GraphBackend};

/// What a configured existence check returns.
#[derive(Debug, Clone)]
enum CheckBehavior {
    /// No match
    Miss,
    /// A not-found error (the retryable "proceed" signal)
    MissAsError,
    /// An existing node
    Hit(NodeRef),
    /// A failure
    Fail(String),
}

/// Mock backend for testing.
///
/// Configurable responses, failure injection, call counters and an
/// optional artificial delay for single-flight and cancellation tests.
pub struct MockGraphBackend {
    backend_id: String,
    available: AtomicBool,
    check: CheckBehavior,
    created: Option<NodeRef>,
    create_failure: Option<String>,
    delay: Option<Duration>,
    check_calls: AtomicU32,
    create_calls: AtomicU32,
}

impl MockGraphBackend {
    /// Create a new mock backend.
    pub fn new(backend_id: impl Into<String>) -> Self {
        Self {
            backend_id: backend_id.into(),
            available: AtomicBool::new(true),
            check: CheckBehavior::Miss,
            created: None,
            create_failure: None,
            delay: None,
            check_calls: AtomicU32::new(0),
            create_calls: AtomicU32::new(0),
        }
    }

    /// Existence checks find this node.
    pub fn with_existing(mut self, node: NodeRef) -> Self {
        self.check = CheckBehavior::Hit(node);
        self
    }

    /// Existence checks fail with `NotFound` (instead of `Ok(None)`).
    pub fn with_check_not_found_error(mut self) -> Self {
        self.check = CheckBehavior::MissAsError;
        self
    }

    /// Existence checks fail with `RequestFailed`.
    pub fn with_check_failure(mut self, message: impl Into<String>) -> Self {
        self.check = CheckBehavior::Fail(message.into());
        self
    }

    /// Creation returns this node instead of a generated one.
    pub fn with_created(mut self, node: NodeRef) -> Self {
        self.created = Some(node);
        self
    }

    /// Creation fails with `RequestFailed`.
    pub fn with_create_failure(mut self, message: impl Into<String>) -> Self {
        self.create_failure = Some(message.into());
        self
    }

    /// Delay every call, to hold operations in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Number of existence checks made.
    pub fn check_calls(&self) -> u32 {
        self.check_calls.load(Ordering::SeqCst)
    }

    /// Number of creation calls made.
    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    async fn maybe_delay(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockGraphBackend {
    fn default() -> Self {
        Self::new("mock-graph")
    }
}

#[async_trait]
impl GraphBackend for MockGraphBackend {
    fn id(&self) -> &str {
        &self.backend_id
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn check_exists(
        &self,
        _kind: NodeKind,
        _text: &str,
    ) -> Result<Option<NodeRef>, BackendError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_delay().await;

        match &self.check {
            CheckBehavior::Miss => Ok(None),
            CheckBehavior::MissAsError => Err(BackendError::NotFound),
            CheckBehavior::Hit(node) => Ok(Some(node.clone())),
            CheckBehavior::Fail(message) => Err(BackendError::RequestFailed(message.clone())),
        }
    }

    async fn create_node(
        &self,
        kind: NodeKind,
        payload: serde_json::Value,
    ) -> Result<NodeRef, BackendError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_delay().await;

        if let Some(message) = &self.create_failure {
            return Err(BackendError::RequestFailed(message.clone()));
        }

        if let Some(node) = &self.created {
            return Ok(node.clone());
        }

        let label = payload
            .get("word")
            .or_else(|| payload.get("text"))
            .and_then(|v| v.as_str())
            .unwrap_or("created")
            .to_string();

        Ok(NodeRef::new(
            uuid::Uuid::new_v4().to_string(),
            kind,
            label,
        ))
    }
}
