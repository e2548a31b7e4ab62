//! Registry of live wizard sessions.
//!
//! A hosting process keeps one registry and routes UI events to sessions
//! by ID. One session serves exactly one creation surface; the registry
//! only opens, looks up and closes them.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

use crate::backend::GraphBackend;
use crate::config::WizardConfig;
use crate::session::WizardSession;

/// Concurrent map of live creation sessions.
pub struct WizardRegistry {
    sessions: DashMap<String, Arc<WizardSession>>,
    config: WizardConfig,
}

impl WizardRegistry {
    /// Create a registry; every opened session inherits the config.
    pub fn new(config: WizardConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Open a new session against the given backend.
    pub fn open(&self, backend: Arc<dyn GraphBackend>) -> Arc<WizardSession> {
        let session = Arc::new(WizardSession::new(backend, self.config.clone()));
        self.sessions
            .insert(session.session_id().to_string(), session.clone());
        info!(
            session_id = session.session_id(),
            live = self.sessions.len(),
            "Session registered"
        );
        session
    }

    /// Look up a live session.
    pub fn get(&self, session_id: &str) -> Option<Arc<WizardSession>> {
        self.sessions.get(session_id).map(|s| Arc::clone(s.value()))
    }

    /// Cancel and remove a session. Returns false if it was not live.
    pub async fn close(&self, session_id: &str) -> bool {
        match self.sessions.remove(session_id) {
            Some((_, session)) => {
                session.cancel().await;
                info!(session_id, live = self.sessions.len(), "Session closed");
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// IDs of all live sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockGraphBackend;
    use crate::state::SessionPhase;

    #[tokio::test]
    async fn test_open_get_close() {
        let registry = WizardRegistry::default();
        let backend = Arc::new(MockGraphBackend::default());

        let session = registry.open(backend);
        let id = session.session_id().to_string();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());

        assert!(registry.close(&id).await);
        assert!(registry.is_empty());
        assert!(!registry.close(&id).await);

        // Closing cancelled the session
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::Cancelled);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let registry = WizardRegistry::default();
        let backend = Arc::new(MockGraphBackend::default());

        let a = registry.open(backend.clone());
        let b = registry.open(backend);
        assert_ne!(a.session_id(), b.session_id());
        assert_eq!(registry.session_ids().len(), 2);

        a.select_kind(graph_model::NodeKind::Word).await;
        let snapshot = b.snapshot().await;
        assert_eq!(snapshot.kind, None);
    }
}
