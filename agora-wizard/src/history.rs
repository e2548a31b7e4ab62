//! Per-session transition history.
//!
//! A bounded log of what happened inside one wizard session, for support
//! tooling and debugging of abandoned creation flows.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use graph_model::NodeKind;

/// What kind of operation a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// A kind was chosen (or re-chosen)
    SelectKind,
    /// A draft field changed
    FieldUpdate,
    /// Forward step transition
    Advance,
    /// Backward step transition
    Retreat,
    /// Word existence check
    ExistenceCheck,
    /// Final submission
    Submit,
    /// Session cancelled
    Cancel,
    /// A subordinate view reported an error
    ViewError,
}

/// How the operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The operation mutated state as requested
    Applied,
    /// The operation was rejected (invalid step, busy session, ...)
    Rejected,
    /// A backend call failed
    Failed,
}

/// An entry in the session history.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Unique entry ID
    pub entry_id: String,
    /// When the operation ran
    pub at: DateTime<Utc>,
    /// Operation recorded
    pub action: SessionAction,
    /// How it ended
    pub outcome: ActionOutcome,
    /// Kind chosen at the time
    pub kind: Option<NodeKind>,
    /// Step before the operation
    pub step_before: u8,
    /// Step after the operation
    pub step_after: u8,
}

/// Counts over a session's history.
#[derive(Debug, Clone, Default)]
pub struct HistoryStats {
    /// Total entries recorded
    pub total: usize,
    /// Applied operations
    pub applied: usize,
    /// Rejected operations
    pub rejected: usize,
    /// Failed operations
    pub failed: usize,
}

/// Bounded transition log for one session (newest first).
pub struct SessionHistory {
    entries: Arc<RwLock<VecDeque<HistoryEntry>>>,
    max_entries: usize,
    enabled: bool,
}

impl SessionHistory {
    /// Create a history log.
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            max_entries,
            enabled,
        }
    }

    /// Record one operation. No-op when history is disabled.
    pub async fn record(
        &self,
        action: SessionAction,
        outcome: ActionOutcome,
        kind: Option<NodeKind>,
        step_before: u8,
        step_after: u8,
    ) {
        if !self.enabled {
            return;
        }

        let entry = HistoryEntry {
            entry_id: uuid::Uuid::new_v4().to_string(),
            at: Utc::now(),
            action,
            outcome,
            kind,
            step_before,
            step_after,
        };

        let mut entries = self.entries.write().await;
        entries.push_front(entry);

        // Prune if over limit
        while entries.len() > self.max_entries {
            entries.pop_back();
        }
    }

    /// Get recent entries (newest first).
    pub async fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }

    /// Number of entries.
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Outcome counts.
    pub async fn stats(&self) -> HistoryStats {
        let entries = self.entries.read().await;
        HistoryStats {
            total: entries.len(),
            applied: entries
                .iter()
                .filter(|e| e.outcome == ActionOutcome::Applied)
                .count(),
            rejected: entries
                .iter()
                .filter(|e| e.outcome == ActionOutcome::Rejected)
                .count(),
            failed: entries
                .iter()
                .filter(|e| e.outcome == ActionOutcome::Failed)
                .count(),
        }
    }

    /// Clear the log.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_and_stats() {
        let history = SessionHistory::new(true, 100);

        history
            .record(SessionAction::SelectKind, ActionOutcome::Applied, Some(NodeKind::Word), 1, 1)
            .await;
        history
            .record(SessionAction::Advance, ActionOutcome::Rejected, Some(NodeKind::Word), 1, 1)
            .await;

        let stats = history.stats().await;
        assert_eq!(stats.total, 2);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.rejected, 1);

        // Newest first
        let recent = history.recent(10).await;
        assert_eq!(recent[0].action, SessionAction::Advance);
    }

    #[tokio::test]
    async fn test_pruning() {
        let history = SessionHistory::new(true, 3);
        for step in 0..10u8 {
            history
                .record(SessionAction::Advance, ActionOutcome::Applied, None, step, step + 1)
                .await;
        }
        assert_eq!(history.count().await, 3);
        let recent = history.recent(10).await;
        assert_eq!(recent[0].step_before, 9);
    }

    #[tokio::test]
    async fn test_disabled_history_records_nothing() {
        let history = SessionHistory::new(false, 100);
        history
            .record(SessionAction::Submit, ActionOutcome::Applied, None, 1, 1)
            .await;
        assert_eq!(history.count().await, 0);
    }
}
