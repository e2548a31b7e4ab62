//! Answer node layout.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for answer node plans.
pub struct AnswerPlans;

impl PlanProvider for AnswerPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Answer
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Answer),
            ViewMode::Preview,
            RegionRatios::new(0.80, 0.20, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.50)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Answer),
            ViewMode::Detail,
            RegionRatios::new(0.30, 0.20, 0.45),
        )
        .with_anchor("main-text", Region::ContentText, 0.40)
        .with_anchor("question-link", Region::ContentText, 0.88)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("content-controls", Region::ContentVoting, 0.35)
        .with_anchor("vote-tally", Region::ContentVoting, 0.80)
    }
}
