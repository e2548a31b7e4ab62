//! Open question node layout.
//!
//! Questions have no content voting in preview; the detail view splits the
//! lower half between inclusion voting and answer-quality voting.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for open question node plans.
pub struct OpenQuestionPlans;

impl PlanProvider for OpenQuestionPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::OpenQuestion
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::OpenQuestion),
            ViewMode::Preview,
            RegionRatios::new(0.70, 0.30, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.50)
        .with_anchor("answer-count", Region::ContentText, 0.90)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::OpenQuestion),
            ViewMode::Detail,
            RegionRatios::new(0.35, 0.25, 0.35),
        )
        .with_anchor("main-text", Region::ContentText, 0.45)
        .with_anchor("tags", Region::ContentText, 0.90)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("content-controls", Region::ContentVoting, 0.40)
    }
}
