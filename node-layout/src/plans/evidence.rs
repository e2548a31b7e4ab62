//! Evidence node layout.
//!
//! Evidence detail reserves the largest lower band among the claim-like
//! kinds: peer-review voting spans three quality axes.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for evidence node plans.
pub struct EvidencePlans;

impl PlanProvider for EvidencePlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Evidence
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Evidence),
            ViewMode::Preview,
            RegionRatios::new(0.75, 0.25, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.45)
        .with_anchor("source-link", Region::ContentText, 0.85)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Evidence),
            ViewMode::Detail,
            RegionRatios::new(0.25, 0.20, 0.50),
        )
        .with_anchor("main-text", Region::ContentText, 0.40)
        .with_anchor("source-link", Region::ContentText, 0.85)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("quality-axes", Region::ContentVoting, 0.30)
        .with_anchor("content-controls", Region::ContentVoting, 0.65)
        .with_anchor("vote-tally", Region::ContentVoting, 0.90)
    }
}
