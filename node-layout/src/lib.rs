//! Layout plans and placement geometry for Agora graph nodes.
//!
//! Every node kind renders inside a square content box split into three
//! proportional vertical bands: text content, inclusion voting and content
//! voting. This crate holds the static plan tables and the pure math that
//! places them:
//!
//! - [`LayoutPlan`]: region ratios plus named anchors for one `(kind, mode)`
//! - [`LayoutResolver`]: total lookup with a fallback plan for unknown kinds
//! - [`geometry`]: region stacking and anchor placement functions
//!
//! The resolver holds no mutable state and is consulted independently of
//! the creation wizard.
//!
//! # Example
//!
//! ```
//! use graph_model::{NodeKind, ViewMode};
//! use node_layout::{geometry, LayoutResolver};
//!
//! let resolver = LayoutResolver::new();
//! let plan = resolver.resolve(NodeKind::Statement, ViewMode::Detail);
//! let extents = geometry::region_extents(240.0, &plan.ratios, geometry::REGION_SPACING);
//! if let Some(anchor) = plan.anchor("main-text") {
//!     let _y = geometry::anchor_position(&extents, anchor);
//! }
//! ```

pub mod geometry;
pub mod plan;
pub mod plans;
pub mod resolver;

// Re-export main types
pub use geometry::{anchor_position, region_extents, Extent, RegionExtents, REGION_SPACING};
pub use plan::{Anchor, LayoutPlan, Region, RegionRatios};
pub use plans::{standard_providers, PlanProvider};
pub use resolver::LayoutResolver;
