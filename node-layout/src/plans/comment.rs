//! Comment node layout.
//!
//! Comments deliberately omit the content-voting band - a comment is
//! included or not, its text is never voted on.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for comment node plans.
pub struct CommentPlans;

impl PlanProvider for CommentPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Comment),
            ViewMode::Preview,
            RegionRatios::new(0.90, 0.10, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Comment),
            ViewMode::Detail,
            RegionRatios::new(0.80, 0.15, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.40)
        .with_anchor("author", Region::ContentText, 0.90)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }
}
