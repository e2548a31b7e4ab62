//! Shared node model for the Agora knowledge graph.
//!
//! This crate holds the types shared between the node layout resolver and
//! the creation wizard:
//!
//! - [`NodeKind`]: the kinds of node the graph renders
//! - [`NodeRef`]: identity of an existing or newly created node
//! - [`ViewMode`]: preview vs detail rendering
//! - [`NodeDraft`]: the field record a creation session accumulates
//!
//! With the `typescript` feature enabled, every type crossing to the UI
//! host exports a TypeScript definition via ts-rs.

pub mod draft;
pub mod node;

// Re-export main types
pub use draft::{DraftError, DraftField, FieldValue, NodeDraft};
pub use node::{KindParseError, NodeKind, NodeRef, ViewMode};
