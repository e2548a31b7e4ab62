//! Messages from subordinate input views.
//!
//! Every step's input view reports upward through this one discriminated
//! union; [`crate::session::WizardSession::handle`] is the sole
//! interpreter. Matches the TypeScript `ViewMessage` union in the host.

use serde::{Deserialize, Serialize};

use graph_model::{DraftField, FieldValue};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A message from a subordinate input view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewMessage {
    /// The view's inputs are complete; move to the next step
    Proceed,
    /// Return to the previous step
    Back,
    /// One form field changed
    FieldChange {
        /// Field being updated
        field: DraftField,
        /// New value
        value: FieldValue,
    },
    /// The view hit an error it cannot handle locally
    Error {
        /// Human-readable description
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_wire_format() {
        let msg = ViewMessage::FieldChange {
            field: DraftField::WordText,
            value: FieldValue::Text("liberty".into()),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "field_change");
        assert_eq!(json["field"], "word_text");

        let back: ViewMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_proceed_roundtrip() {
        let json = serde_json::to_string(&ViewMessage::Proceed).unwrap();
        let parsed: ViewMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ViewMessage::Proceed);
    }
}
