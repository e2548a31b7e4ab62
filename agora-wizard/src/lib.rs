//! Node creation wizard sessions for the Agora knowledge graph.
//!
//! Each creatable node kind has a fixed linear step sequence (choose the
//! kind, collect its fields, review, publish). A [`WizardSession`] drives
//! one such flow: it interprets messages from the subordinate input views,
//! validates each step, runs the word existence check and the final
//! submission through an injected [`GraphBackend`], and reports everything
//! back to the hosting view as serializable snapshots and events.
//!
//! # Key components
//!
//! - [`WizardSession`]: the per-session controller
//! - [`GraphBackend`]: injected graph service (REST implementation in
//!   [`backend::HttpGraphBackend`], test double in
//!   [`backend::MockGraphBackend`])
//! - [`WizardRegistry`]: routes a host's live sessions by ID
//! - [`step`]: the step tables and validation predicates
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use agora_wizard::{backend::MockGraphBackend, WizardConfig, WizardSession};
//! use graph_model::{DraftField, FieldValue, NodeKind};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let backend = Arc::new(MockGraphBackend::default());
//! let session = WizardSession::new(backend, WizardConfig::default());
//!
//! session.select_kind(NodeKind::Word).await;
//! session.advance().await;
//! let snapshot = session
//!     .set_field(DraftField::WordText, FieldValue::Text("liberty".into()))
//!     .await;
//! assert_eq!(snapshot.current_step, 2);
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod events;
pub mod history;
pub mod message;
pub mod registry;
pub mod session;
pub mod state;
pub mod step;

// Re-export main types
pub use backend::{BackendError, GraphBackend};
pub use config::WizardConfig;
pub use events::{WizardEvent, WizardEventStream};
pub use message::ViewMessage;
pub use registry::WizardRegistry;
pub use session::WizardSession;
pub use state::{SessionPhase, WizardSnapshot, WizardState};
pub use step::{draft_valid, is_step_valid, max_steps, StepDefinition, StepView};
