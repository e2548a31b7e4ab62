//! Category node layout.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for category node plans.
pub struct CategoryPlans;

impl PlanProvider for CategoryPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Category
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Category),
            ViewMode::Preview,
            RegionRatios::new(0.70, 0.30, 0.0),
        )
        .with_anchor("title", Region::ContentText, 0.40)
        .with_anchor("member-count", Region::ContentText, 0.80)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        // Categories are voted on for inclusion only; the lower band lists
        // composing words instead of content-voting controls.
        LayoutPlan::new(
            Some(NodeKind::Category),
            ViewMode::Detail,
            RegionRatios::new(0.45, 0.30, 0.20),
        )
        .with_anchor("title", Region::ContentText, 0.20)
        .with_anchor("composing-words", Region::ContentText, 0.65)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("member-list", Region::ContentVoting, 0.50)
    }
}
