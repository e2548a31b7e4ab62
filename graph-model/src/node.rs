//! Node kinds, references and display modes.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the SVG frontend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// The kinds of node that exist in the knowledge graph.
///
/// `Comment` nodes appear in the graph (and have layout plans) but cannot
/// be created through the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A single word with a definition
    Word,
    /// A declarative statement
    Statement,
    /// An open question inviting answers
    OpenQuestion,
    /// A measurable quantity with a unit
    Quantity,
    /// An answer attached to an open question
    Answer,
    /// A piece of evidence supporting or opposing a claim
    Evidence,
    /// A grouping of words
    Category,
    /// A discussion comment on another node
    Comment,
}

impl NodeKind {
    /// Wire name, stable across the API and the frontend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Statement => "statement",
            Self::OpenQuestion => "openquestion",
            Self::Quantity => "quantity",
            Self::Answer => "answer",
            Self::Evidence => "evidence",
            Self::Category => "category",
            Self::Comment => "comment",
        }
    }

    /// Every kind, in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Word,
            Self::Statement,
            Self::OpenQuestion,
            Self::Quantity,
            Self::Answer,
            Self::Evidence,
            Self::Category,
            Self::Comment,
        ]
    }

    /// Kinds that can be created through the wizard.
    pub fn creatable() -> Vec<Self> {
        Self::all()
            .into_iter()
            .filter(Self::is_creatable)
            .collect()
    }

    /// Whether this kind can be created through the wizard.
    pub fn is_creatable(&self) -> bool {
        !matches!(self, Self::Comment)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a node kind from its wire name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown node kind: {0}")]
pub struct KindParseError(pub String);

impl FromStr for NodeKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Self::Word),
            "statement" => Ok(Self::Statement),
            "openquestion" => Ok(Self::OpenQuestion),
            "quantity" => Ok(Self::Quantity),
            "answer" => Ok(Self::Answer),
            "evidence" => Ok(Self::Evidence),
            "category" => Ok(Self::Category),
            "comment" => Ok(Self::Comment),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

/// Display mode a node is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Compact rendering on the canvas
    Preview,
    /// Expanded rendering with full voting controls
    Detail,
}

impl ViewMode {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Detail => "detail",
        }
    }
}

/// Identity of an existing (or newly created) graph node.
///
/// Returned by existence checks and creation so the host can route to the
/// node or splice it into the rendered graph immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct NodeRef {
    /// Node identifier
    pub id: String,
    /// Kind of the node
    pub kind: NodeKind,
    /// Human-readable label (the word text, statement preview, etc.)
    pub label: String,
}

impl NodeRef {
    /// Create a new reference.
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in NodeKind::all() {
            let parsed: NodeKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!("definitely-not-a-kind".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_comment_not_creatable() {
        assert!(!NodeKind::Comment.is_creatable());
        assert!(!NodeKind::creatable().contains(&NodeKind::Comment));
        assert_eq!(NodeKind::creatable().len(), 7);
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&NodeKind::OpenQuestion).unwrap();
        assert_eq!(json, "\"openquestion\"");
    }
}
