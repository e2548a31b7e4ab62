//! The wizard session controller.
//!
//! One `WizardSession` drives one creation flow: it owns the session
//! state, interprets messages from the subordinate input views, runs the
//! word existence check and the final submission through the injected
//! [`GraphBackend`], and broadcasts events to the hosting view.
//!
//! Backend failures never escape an operation - they are translated into
//! snapshot fields (`last_error` / `last_success`) that the host renders.

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use graph_model::{DraftField, FieldValue, NodeKind};

use crate::backend::{BackendError, GraphBackend};
use crate::config::WizardConfig;
use crate::events::{WizardEvent, WizardEventStream};
use crate::history::{ActionOutcome, HistoryEntry, HistoryStats, SessionAction, SessionHistory};
use crate::message::ViewMessage;
use crate::state::{SessionPhase, WizardSnapshot, WizardState};
use crate::step::{self, max_steps};

/// Controller for one node creation session.
pub struct WizardSession {
    /// Session identifier
    session_id: String,
    /// Configuration
    config: WizardConfig,
    /// Injected graph service
    backend: Arc<dyn GraphBackend>,
    /// Live state
    state: Arc<RwLock<WizardState>>,
    /// Event fan-out to host subscribers
    events: broadcast::Sender<WizardEvent>,
    /// Transition history
    history: SessionHistory,
}

impl WizardSession {
    /// Open a session with a generated ID.
    pub fn new(backend: Arc<dyn GraphBackend>, config: WizardConfig) -> Self {
        Self::with_session_id(backend, config, uuid::Uuid::new_v4().to_string())
    }

    /// Open a session with an explicit ID.
    pub fn with_session_id(
        backend: Arc<dyn GraphBackend>,
        config: WizardConfig,
        session_id: impl Into<String>,
    ) -> Self {
        let session_id = session_id.into();
        let (events, _) = broadcast::channel(config.event_buffer.max(1));

        info!(
            session_id = %session_id,
            backend = backend.id(),
            "Wizard session opened"
        );

        Self {
            history: SessionHistory::new(config.history_enabled, config.history_max_entries),
            state: Arc::new(RwLock::new(WizardState::new(session_id.clone()))),
            session_id,
            config,
            backend,
            events,
        }
    }

    /// The session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Subscribe to this session's events.
    pub fn subscribe(&self) -> WizardEventStream {
        WizardEventStream::new(self.events.subscribe())
    }

    /// Current state snapshot.
    pub async fn snapshot(&self) -> WizardSnapshot {
        self.state.read().await.snapshot()
    }

    /// Recent history entries (newest first).
    pub async fn recent_history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.history.recent(limit).await
    }

    /// History outcome counts.
    pub async fn history_stats(&self) -> HistoryStats {
        self.history.stats().await
    }

    /// Interpret a message from a subordinate input view.
    pub async fn handle(&self, message: ViewMessage) -> WizardSnapshot {
        match message {
            ViewMessage::Proceed => self.advance().await,
            ViewMessage::Back => self.retreat().await,
            ViewMessage::FieldChange { field, value } => self.set_field(field, value).await,
            ViewMessage::Error { message } => self.view_error(message).await,
        }
    }

    /// Choose (or switch) the kind being created.
    ///
    /// Always returns to step 1 and clears kind-specific draft fields - a
    /// mid-flow switch re-enters the new kind's sequence from the top.
    pub async fn select_kind(&self, kind: NodeKind) -> WizardSnapshot {
        let mut state = self.state.write().await;
        if !state.is_active() {
            return state.snapshot();
        }
        if state.busy() {
            warn!(session_id = %self.session_id, "select_kind rejected while a call is in flight");
            self.history
                .record(SessionAction::SelectKind, ActionOutcome::Rejected, state.kind, state.current_step, state.current_step)
                .await;
            return state.snapshot();
        }
        if !kind.is_creatable() {
            let step = state.current_step;
            self.fail(&mut state, format!("{kind} nodes cannot be created here"));
            self.history
                .record(SessionAction::SelectKind, ActionOutcome::Rejected, state.kind, step, step)
                .await;
            self.emit_state(&state);
            return state.snapshot();
        }

        let step_before = state.current_step;
        state.kind = Some(kind);
        state.draft.clear_kind_fields();
        state.current_step = 1;
        state.last_error = None;

        debug!(session_id = %self.session_id, kind = %kind, "Kind selected");
        self.history
            .record(SessionAction::SelectKind, ActionOutcome::Applied, Some(kind), step_before, 1)
            .await;
        self.emit_state(&state);
        state.snapshot()
    }

    /// Apply a typed draft field update.
    pub async fn set_field(&self, field: DraftField, value: FieldValue) -> WizardSnapshot {
        let mut state = self.state.write().await;
        if !state.is_active() {
            return state.snapshot();
        }

        let step = state.current_step;
        let kind = state.kind;
        match state.draft.set(field, value) {
            Ok(()) => {
                self.history
                    .record(SessionAction::FieldUpdate, ActionOutcome::Applied, kind, step, step)
                    .await;
            }
            Err(e) => {
                self.fail(&mut state, e.to_string());
                self.history
                    .record(SessionAction::FieldUpdate, ActionOutcome::Rejected, kind, step, step)
                    .await;
            }
        }
        self.emit_state(&state);
        state.snapshot()
    }

    /// Move to the next step.
    ///
    /// A no-op on the last step. Leaving the word-text step first runs the
    /// asynchronous existence check; a match ends the session with an
    /// [`WizardEvent::ExistingEntityFound`] redirect instead of advancing.
    pub async fn advance(&self) -> WizardSnapshot {
        let word = {
            let mut state = self.state.write().await;
            if !state.is_active() {
                return state.snapshot();
            }
            if state.busy() {
                warn!(session_id = %self.session_id, "advance rejected while a call is in flight");
                self.history
                    .record(SessionAction::Advance, ActionOutcome::Rejected, state.kind, state.current_step, state.current_step)
                    .await;
                return state.snapshot();
            }

            let kind = state.kind;
            let current = state.current_step;

            if current >= max_steps(kind) {
                debug!(session_id = %self.session_id, step = current, "advance on last step is a no-op");
                self.history
                    .record(SessionAction::Advance, ActionOutcome::Rejected, kind, current, current)
                    .await;
                return state.snapshot();
            }

            if !step::is_step_valid(kind, current, &state.draft) {
                let title = step::step_definition(kind, current).title;
                self.fail(&mut state, format!("Step \"{title}\" is incomplete"));
                self.history
                    .record(SessionAction::Advance, ActionOutcome::Rejected, kind, current, current)
                    .await;
                self.emit_state(&state);
                return state.snapshot();
            }

            if !step::requires_existence_check(kind, current) {
                state.current_step = current + 1;
                state.last_error = None;
                debug!(session_id = %self.session_id, step = state.current_step, "Advanced");
                self.history
                    .record(SessionAction::Advance, ActionOutcome::Applied, kind, current, current + 1)
                    .await;
                self.emit_state(&state);
                return state.snapshot();
            }

            // Word flow: check for an existing word before advancing
            state.is_checking = true;
            self.emit_state(&state);
            state.draft.word_text.trim().to_string()
        };

        self.run_existence_check(word).await
    }

    /// Move to the previous step. A no-op on step 1.
    pub async fn retreat(&self) -> WizardSnapshot {
        let mut state = self.state.write().await;
        if !state.is_active() {
            return state.snapshot();
        }
        if state.busy() {
            self.history
                .record(SessionAction::Retreat, ActionOutcome::Rejected, state.kind, state.current_step, state.current_step)
                .await;
            return state.snapshot();
        }

        let current = state.current_step;
        if current <= 1 {
            self.history
                .record(SessionAction::Retreat, ActionOutcome::Rejected, state.kind, current, current)
                .await;
            return state.snapshot();
        }

        state.current_step = current - 1;
        state.last_error = None;
        debug!(session_id = %self.session_id, step = state.current_step, "Retreated");
        self.history
            .record(SessionAction::Retreat, ActionOutcome::Applied, state.kind, current, current - 1)
            .await;
        self.emit_state(&state);
        state.snapshot()
    }

    /// Submit the draft.
    ///
    /// Valid only on the review step with a fully valid draft; otherwise
    /// rejected without a service call. Exactly one creation call can be
    /// in flight per session.
    pub async fn submit(&self) -> WizardSnapshot {
        let (kind, payload) = {
            let mut state = self.state.write().await;
            if !state.is_active() {
                return state.snapshot();
            }
            if state.busy() {
                warn!(session_id = %self.session_id, "submit rejected while a call is in flight");
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Rejected, state.kind, state.current_step, state.current_step)
                    .await;
                return state.snapshot();
            }

            let current = state.current_step;
            let Some(kind) = state.kind else {
                self.fail(&mut state, "Choose what to create first".to_string());
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Rejected, None, current, current)
                    .await;
                self.emit_state(&state);
                return state.snapshot();
            };

            if current != max_steps(Some(kind)) {
                self.fail(&mut state, "Submission is only possible from the review step".to_string());
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Rejected, Some(kind), current, current)
                    .await;
                self.emit_state(&state);
                return state.snapshot();
            }

            if !step::draft_valid(kind, &state.draft) {
                self.fail(&mut state, "The draft is incomplete".to_string());
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Rejected, Some(kind), current, current)
                    .await;
                self.emit_state(&state);
                return state.snapshot();
            }

            state.is_submitting = true;
            state.last_error = None;
            self.emit_state(&state);
            (kind, state.draft.payload_for(kind))
        };

        info!(session_id = %self.session_id, kind = %kind, "Submitting node");
        let result = timeout(
            Duration::from_millis(self.config.check_timeout_ms),
            self.backend.create_node(kind, payload),
        )
        .await;

        let mut state = self.state.write().await;
        if !state.is_active() {
            debug!(session_id = %self.session_id, "Discarding submit result for disposed session");
            return state.snapshot();
        }
        state.is_submitting = false;
        let current = state.current_step;

        match result {
            Ok(Ok(node)) => {
                state.phase = SessionPhase::Completed;
                state.last_success =
                    Some(format!("Created {} \"{}\" ({})", kind, node.label, node.id));
                info!(
                    session_id = %self.session_id,
                    node_id = %node.id,
                    "Node created"
                );
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Applied, Some(kind), current, current)
                    .await;
                self.emit(WizardEvent::EntityCreated { node });
            }
            Ok(Err(e)) => {
                self.fail(&mut state, e.to_string());
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Failed, Some(kind), current, current)
                    .await;
            }
            Err(_elapsed) => {
                self.fail(
                    &mut state,
                    BackendError::Timeout(self.config.check_timeout_ms).to_string(),
                );
                self.history
                    .record(SessionAction::Submit, ActionOutcome::Failed, Some(kind), current, current)
                    .await;
            }
        }

        self.emit_state(&state);
        state.snapshot()
    }

    /// Cancel the session. Results of in-flight calls are discarded.
    pub async fn cancel(&self) -> WizardSnapshot {
        let mut state = self.state.write().await;
        if !state.is_active() {
            return state.snapshot();
        }

        state.phase = SessionPhase::Cancelled;
        state.is_checking = false;
        state.is_submitting = false;

        info!(session_id = %self.session_id, "Wizard session cancelled");
        self.history
            .record(SessionAction::Cancel, ActionOutcome::Applied, state.kind, state.current_step, state.current_step)
            .await;
        self.emit_state(&state);
        state.snapshot()
    }

    /// Run the word existence check and apply its outcome.
    ///
    /// `is_checking` was set by the caller while holding the state lock.
    async fn run_existence_check(&self, word: String) -> WizardSnapshot {
        debug!(session_id = %self.session_id, word = %word, "Checking word existence");
        let result = timeout(
            Duration::from_millis(self.config.check_timeout_ms),
            self.backend.check_exists(NodeKind::Word, &word),
        )
        .await;

        let mut state = self.state.write().await;
        if !state.is_active() {
            debug!(session_id = %self.session_id, "Discarding check result for disposed session");
            return state.snapshot();
        }
        state.is_checking = false;
        let current = state.current_step;
        let kind = state.kind;

        match result {
            Ok(Ok(Some(node))) => {
                state.phase = SessionPhase::Redirected;
                state.last_success = Some(format!("\"{}\" already exists", node.label));
                info!(
                    session_id = %self.session_id,
                    node_id = %node.id,
                    "Word already exists, redirecting"
                );
                self.history
                    .record(SessionAction::ExistenceCheck, ActionOutcome::Applied, kind, current, current)
                    .await;
                self.emit(WizardEvent::ExistingEntityFound { node });
            }
            Ok(Ok(None)) => {
                state.current_step = current + 1;
                state.last_error = None;
                self.history
                    .record(SessionAction::ExistenceCheck, ActionOutcome::Applied, kind, current, current + 1)
                    .await;
            }
            Ok(Err(e)) if e.is_not_found() => {
                state.current_step = current + 1;
                state.last_error = None;
                self.history
                    .record(SessionAction::ExistenceCheck, ActionOutcome::Applied, kind, current, current + 1)
                    .await;
            }
            Ok(Err(e)) => {
                self.fail(&mut state, e.to_string());
                self.history
                    .record(SessionAction::ExistenceCheck, ActionOutcome::Failed, kind, current, current)
                    .await;
            }
            Err(_elapsed) => {
                self.fail(
                    &mut state,
                    BackendError::Timeout(self.config.check_timeout_ms).to_string(),
                );
                self.history
                    .record(SessionAction::ExistenceCheck, ActionOutcome::Failed, kind, current, current)
                    .await;
            }
        }

        self.emit_state(&state);
        state.snapshot()
    }

    /// Record an error reported by a subordinate view.
    async fn view_error(&self, message: String) -> WizardSnapshot {
        let mut state = self.state.write().await;
        if !state.is_active() {
            return state.snapshot();
        }

        self.fail(&mut state, message);
        self.history
            .record(SessionAction::ViewError, ActionOutcome::Failed, state.kind, state.current_step, state.current_step)
            .await;
        self.emit_state(&state);
        state.snapshot()
    }

    /// Set `last_error` and emit the error event.
    fn fail(&self, state: &mut WizardState, message: String) {
        warn!(session_id = %self.session_id, %message, "Wizard operation failed");
        state.last_error = Some(message.clone());
        self.emit(WizardEvent::ErrorOccurred { message });
    }

    fn emit_state(&self, state: &WizardState) {
        self.emit(WizardEvent::StateChanged {
            snapshot: state.snapshot(),
        });
    }

    fn emit(&self, event: WizardEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
