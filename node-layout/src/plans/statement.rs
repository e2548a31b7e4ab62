//! Statement node layout.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for statement node plans.
pub struct StatementPlans;

impl PlanProvider for StatementPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Statement
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Statement),
            ViewMode::Preview,
            RegionRatios::new(0.75, 0.25, 0.0),
        )
        .with_anchor("main-text", Region::ContentText, 0.50)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Statement),
            ViewMode::Detail,
            RegionRatios::new(0.30, 0.20, 0.45),
        )
        .with_anchor("main-text", Region::ContentText, 0.45)
        .with_anchor("tags", Region::ContentText, 0.88)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("content-controls", Region::ContentVoting, 0.35)
        .with_anchor("vote-tally", Region::ContentVoting, 0.80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_detail_has_both_voting_bands() {
        let detail = StatementPlans.detail();
        assert!(detail.ratios.inclusion_voting > 0.0);
        assert!(detail.ratios.content_voting > 0.0);
        assert!(detail.ratios.sum() <= 1.0);
    }
}
