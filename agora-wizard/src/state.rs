//! Wizard session state and its serializable snapshot.

use serde::{Deserialize, Serialize};

use graph_model::{NodeDraft, NodeKind};

use crate::step::{max_steps, step_definition, StepView};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Lifecycle phase of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Session is live and accepting operations
    Active,
    /// An existing node was found; the host should redirect to it
    Redirected,
    /// The node was created successfully
    Completed,
    /// The session was cancelled by the host
    Cancelled,
}

/// The live state of one wizard session.
///
/// Mutated only by [`crate::session::WizardSession`]; the host receives
/// [`WizardSnapshot`] values instead.
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Session identifier
    pub session_id: String,
    /// Chosen node kind (`None` until the type-select step is answered)
    pub kind: Option<NodeKind>,
    /// Current step, always within `[1, max_steps(kind)]`
    pub current_step: u8,
    /// Accumulated form data
    pub draft: NodeDraft,
    /// An existence check is in flight
    pub is_checking: bool,
    /// A creation call is in flight
    pub is_submitting: bool,
    /// Last failure message, cleared by successful transitions
    pub last_error: Option<String>,
    /// Last success message (existing node found, node created)
    pub last_success: Option<String>,
    /// Lifecycle phase
    pub phase: SessionPhase,
}

impl WizardState {
    /// Fresh state for a new session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: None,
            current_step: 1,
            draft: NodeDraft::default(),
            is_checking: false,
            is_submitting: false,
            last_error: None,
            last_success: None,
            phase: SessionPhase::Active,
        }
    }

    /// Whether a backend call is in flight.
    pub fn busy(&self) -> bool {
        self.is_checking || self.is_submitting
    }

    /// Whether the session still accepts operations.
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Serializable snapshot with the derived step fields filled in.
    pub fn snapshot(&self) -> WizardSnapshot {
        let definition = step_definition(self.kind, self.current_step);
        WizardSnapshot {
            session_id: self.session_id.clone(),
            kind: self.kind,
            current_step: self.current_step,
            max_steps: max_steps(self.kind),
            step_title: definition.title.to_string(),
            step_view: definition.view,
            draft: self.draft.clone(),
            is_checking: self.is_checking,
            is_submitting: self.is_submitting,
            last_error: self.last_error.clone(),
            last_success: self.last_success.clone(),
            phase: self.phase,
        }
    }
}

/// What the hosting view renders: the session state plus derived step
/// information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct WizardSnapshot {
    /// Session identifier
    pub session_id: String,
    /// Chosen node kind
    pub kind: Option<NodeKind>,
    /// Current step (1-based)
    pub current_step: u8,
    /// Step count for the chosen kind
    pub max_steps: u8,
    /// Title of the current step
    pub step_title: String,
    /// View the current step renders
    pub step_view: StepView,
    /// Accumulated form data
    pub draft: NodeDraft,
    /// An existence check is in flight
    pub is_checking: bool,
    /// A creation call is in flight
    pub is_submitting: bool,
    /// Last failure message
    pub last_error: Option<String>,
    /// Last success message
    pub last_success: Option<String>,
    /// Lifecycle phase
    pub phase: SessionPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = WizardState::new("session-1");
        assert_eq!(state.current_step, 1);
        assert_eq!(state.kind, None);
        assert!(state.is_active());
        assert!(!state.busy());
    }

    #[test]
    fn test_snapshot_derives_step_fields() {
        let mut state = WizardState::new("session-1");
        state.kind = Some(NodeKind::Word);
        state.current_step = 2;

        let snapshot = state.snapshot();
        assert_eq!(snapshot.max_steps, 5);
        assert_eq!(snapshot.step_title, "Choose a word");
        assert_eq!(snapshot.step_view, StepView::TextInput);
    }
}
