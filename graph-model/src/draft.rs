//! The creation draft - the field record a wizard session accumulates.
//!
//! The draft is a superset of the fields across all creatable node kinds;
//! only the subset relevant to the chosen kind is read at submit time.

use serde::{Deserialize, Serialize};

use crate::node::NodeKind;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error updating a draft field.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// Value variant does not match the field's type
    #[error("Field {field:?} expects a {expected} value")]
    TypeMismatch {
        field: DraftField,
        expected: &'static str,
    },
}

/// Every settable draft field, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    WordText,
    Definition,
    PrimaryText,
    UnitCategoryId,
    UnitId,
    ValueText,
    CategoryIds,
    Keywords,
    SourceWordIds,
    Discussion,
    PublicCredit,
}

/// A typed field value, as sent by the subordinate input views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Boolean toggle
    Flag(bool),
    /// List of ids or keywords
    List(Vec<String>),
    /// Nullable id reference
    OptionalId(Option<String>),
}

/// The accumulated creation form data for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct NodeDraft {
    /// The word being defined (word)
    #[serde(default)]
    pub word_text: String,
    /// Definition text (word)
    #[serde(default)]
    pub definition: String,
    /// Main text (statement, openquestion, answer, evidence)
    #[serde(default)]
    pub primary_text: String,
    /// Selected unit category (quantity)
    #[serde(default)]
    pub unit_category_id: Option<String>,
    /// Selected unit within the category (quantity)
    #[serde(default)]
    pub unit_id: Option<String>,
    /// Numeric value, as typed (quantity)
    #[serde(default)]
    pub value_text: String,
    /// Selected categories, at most three
    #[serde(default)]
    pub category_ids: Vec<String>,
    /// User keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Source words composing a category (category)
    #[serde(default)]
    pub source_word_ids: Vec<String>,
    /// Opening discussion comment
    #[serde(default)]
    pub discussion: String,
    /// Whether to credit the creator publicly
    #[serde(default)]
    pub public_credit: bool,
}

impl NodeDraft {
    /// Apply a typed field update.
    ///
    /// A mismatched value variant leaves the draft untouched.
    pub fn set(&mut self, field: DraftField, value: FieldValue) -> Result<(), DraftError> {
        match (field, value) {
            (DraftField::WordText, FieldValue::Text(v)) => self.word_text = v,
            (DraftField::Definition, FieldValue::Text(v)) => self.definition = v,
            (DraftField::PrimaryText, FieldValue::Text(v)) => self.primary_text = v,
            (DraftField::UnitCategoryId, FieldValue::OptionalId(v)) => self.unit_category_id = v,
            (DraftField::UnitId, FieldValue::OptionalId(v)) => self.unit_id = v,
            (DraftField::ValueText, FieldValue::Text(v)) => self.value_text = v,
            (DraftField::CategoryIds, FieldValue::List(v)) => self.category_ids = v,
            (DraftField::Keywords, FieldValue::List(v)) => self.keywords = v,
            (DraftField::SourceWordIds, FieldValue::List(v)) => self.source_word_ids = v,
            (DraftField::Discussion, FieldValue::Text(v)) => self.discussion = v,
            (DraftField::PublicCredit, FieldValue::Flag(v)) => self.public_credit = v,
            (field, _) => {
                return Err(DraftError::TypeMismatch {
                    field,
                    expected: field.expected_variant(),
                })
            }
        }
        Ok(())
    }

    /// Clear every kind-specific field.
    ///
    /// `public_credit` survives as a user preference across kind switches.
    pub fn clear_kind_fields(&mut self) {
        let public_credit = self.public_credit;
        *self = Self {
            public_credit,
            ..Self::default()
        };
    }

    /// The kind-relevant subset as a JSON object for submission.
    pub fn payload_for(&self, kind: NodeKind) -> serde_json::Value {
        let value = self
            .value_text
            .trim()
            .parse::<f64>()
            .map(serde_json::Value::from)
            .unwrap_or_else(|_| serde_json::Value::String(self.value_text.trim().to_string()));

        match kind {
            NodeKind::Word => serde_json::json!({
                "word": self.word_text.trim(),
                "definition": self.definition.trim(),
                "discussion": self.discussion.trim(),
                "public_credit": self.public_credit,
            }),
            NodeKind::Statement
            | NodeKind::OpenQuestion
            | NodeKind::Answer
            | NodeKind::Evidence => serde_json::json!({
                "text": self.primary_text.trim(),
                "category_ids": self.category_ids,
                "keywords": self.keywords,
                "discussion": self.discussion.trim(),
                "public_credit": self.public_credit,
            }),
            NodeKind::Quantity => serde_json::json!({
                "unit_category_id": self.unit_category_id,
                "unit_id": self.unit_id,
                "value": value,
                "category_ids": self.category_ids,
                "keywords": self.keywords,
                "discussion": self.discussion.trim(),
                "public_credit": self.public_credit,
            }),
            NodeKind::Category => serde_json::json!({
                "source_word_ids": self.source_word_ids,
                "discussion": self.discussion.trim(),
                "public_credit": self.public_credit,
            }),
            // Comments are not created through the wizard
            NodeKind::Comment => serde_json::json!({}),
        }
    }
}

impl DraftField {
    /// Name of the value variant this field expects.
    fn expected_variant(&self) -> &'static str {
        match self {
            Self::WordText
            | Self::Definition
            | Self::PrimaryText
            | Self::ValueText
            | Self::Discussion => "text",
            Self::PublicCredit => "flag",
            Self::CategoryIds | Self::Keywords | Self::SourceWordIds => "list",
            Self::UnitCategoryId | Self::UnitId => "optional_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_set() {
        let mut draft = NodeDraft::default();
        draft
            .set(DraftField::WordText, FieldValue::Text("liberty".into()))
            .unwrap();
        draft
            .set(DraftField::PublicCredit, FieldValue::Flag(true))
            .unwrap();
        assert_eq!(draft.word_text, "liberty");
        assert!(draft.public_credit);
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let mut draft = NodeDraft::default();
        let result = draft.set(DraftField::WordText, FieldValue::Flag(true));
        assert!(matches!(
            result,
            Err(DraftError::TypeMismatch {
                field: DraftField::WordText,
                ..
            })
        ));
        assert_eq!(draft.word_text, "");
    }

    #[test]
    fn test_clear_preserves_public_credit() {
        let mut draft = NodeDraft {
            word_text: "liberty".into(),
            keywords: vec!["freedom".into()],
            public_credit: true,
            ..Default::default()
        };
        draft.clear_kind_fields();
        assert_eq!(draft.word_text, "");
        assert!(draft.keywords.is_empty());
        assert!(draft.public_credit);
    }

    #[test]
    fn test_word_payload_subset() {
        let draft = NodeDraft {
            word_text: " liberty ".into(),
            definition: "Freedom from constraint".into(),
            primary_text: "should not leak".into(),
            discussion: "first!".into(),
            ..Default::default()
        };
        let payload = draft.payload_for(NodeKind::Word);
        assert_eq!(payload["word"], "liberty");
        assert_eq!(payload["definition"], "Freedom from constraint");
        assert!(payload.get("text").is_none());
    }

    #[test]
    fn test_quantity_payload_parses_value() {
        let draft = NodeDraft {
            unit_category_id: Some("length".into()),
            unit_id: Some("meter".into()),
            value_text: "42.5".into(),
            ..Default::default()
        };
        let payload = draft.payload_for(NodeKind::Quantity);
        assert_eq!(payload["value"], 42.5);
        assert_eq!(payload["unit_id"], "meter");
    }
}
