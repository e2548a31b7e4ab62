//! End-to-end creation flow integration tests.

use std::sync::Arc;

use futures::StreamExt;

use agora_wizard::backend::MockGraphBackend;
use agora_wizard::{SessionPhase, StepView, WizardConfig, WizardEvent, WizardSession};
use graph_model::{DraftField, FieldValue, NodeKind, NodeRef};

fn open_session(backend: MockGraphBackend) -> (Arc<WizardSession>, Arc<MockGraphBackend>) {
    let backend = Arc::new(backend);
    let session = Arc::new(WizardSession::new(backend.clone(), WizardConfig::default()));
    (session, backend)
}

/// The scenario from the design contract: unset -> statement -> five valid
/// advances -> submit.
#[tokio::test]
async fn test_statement_creation_end_to_end() {
    let created = NodeRef::new("stmt-42", NodeKind::Statement, "All is flux");
    let (session, backend) = open_session(MockGraphBackend::default().with_created(created));
    let mut events = session.subscribe();

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.kind, None);
    assert_eq!(snapshot.current_step, 1);

    let snapshot = session.select_kind(NodeKind::Statement).await;
    assert_eq!(snapshot.current_step, 1);
    assert_eq!(snapshot.max_steps, 6);

    // Step 1 -> 2: type chosen
    session.advance().await;
    // Step 2 -> 3: statement text
    session
        .set_field(DraftField::PrimaryText, FieldValue::Text("All is flux".into()))
        .await;
    session.advance().await;
    // Step 3 -> 4: categories (within the limit)
    session
        .set_field(DraftField::CategoryIds, FieldValue::List(vec!["cat-1".into()]))
        .await;
    session.advance().await;
    // Step 4 -> 5: keywords
    session
        .set_field(
            DraftField::Keywords,
            FieldValue::List(vec!["metaphysics".into()]),
        )
        .await;
    session.advance().await;
    // Step 5 -> 6: discussion
    session
        .set_field(DraftField::Discussion, FieldValue::Text("Heraclitus?".into()))
        .await;
    let snapshot = session.advance().await;
    assert_eq!(snapshot.current_step, 6);
    assert_eq!(snapshot.step_view, StepView::ReviewAndSubmit);

    let snapshot = session.submit().await;
    assert_eq!(snapshot.phase, SessionPhase::Completed);
    assert!(!snapshot.is_submitting);
    assert!(snapshot.last_success.as_deref().unwrap().contains("stmt-42"));
    assert_eq!(backend.create_calls(), 1);

    // The submitting pulse and the creation are visible in the event stream
    let mut saw_submitting = false;
    let mut created_id = None;
    while let Some(event) = events.next().await {
        match event {
            WizardEvent::StateChanged { snapshot } if snapshot.is_submitting => {
                saw_submitting = true;
            }
            WizardEvent::EntityCreated { node } => {
                created_id = Some(node.id);
                break;
            }
            _ => {}
        }
    }
    assert!(saw_submitting);
    assert_eq!(created_id.as_deref(), Some("stmt-42"));
}

/// A word that already exists ends the session with a redirect.
#[tokio::test]
async fn test_word_flow_redirects_to_existing() {
    let existing = NodeRef::new("word-7", NodeKind::Word, "liberty");
    let (session, _backend) = open_session(MockGraphBackend::default().with_existing(existing));
    let mut events = session.subscribe();

    session.select_kind(NodeKind::Word).await;
    session.advance().await;
    session
        .set_field(DraftField::WordText, FieldValue::Text("liberty".into()))
        .await;
    let snapshot = session.advance().await;

    assert_eq!(snapshot.phase, SessionPhase::Redirected);
    assert_eq!(snapshot.current_step, 2);

    let found = loop {
        match events.next().await.expect("event stream ended early") {
            WizardEvent::ExistingEntityFound { node } => break node,
            _ => continue,
        }
    };
    assert_eq!(found.id, "word-7");
}

/// Switching kind mid-flow restarts the new kind's sequence from step 1.
#[tokio::test]
async fn test_kind_switch_restarts_flow() {
    let (session, _backend) = open_session(MockGraphBackend::default());

    session.select_kind(NodeKind::Quantity).await;
    session.advance().await;
    session
        .set_field(
            DraftField::UnitCategoryId,
            FieldValue::OptionalId(Some("length".into())),
        )
        .await;
    session
        .set_field(DraftField::UnitId, FieldValue::OptionalId(Some("meter".into())))
        .await;
    let snapshot = session.advance().await;
    assert_eq!(snapshot.current_step, 3);
    assert_eq!(snapshot.max_steps, 7);

    let snapshot = session.select_kind(NodeKind::Category).await;
    assert_eq!(snapshot.current_step, 1);
    assert_eq!(snapshot.max_steps, 4);
    assert_eq!(snapshot.draft.unit_id, None);
}
