//! Quantity node layout.
//!
//! Quantity detail gives most of the box to content voting - the numeric
//! consensus controls (distribution, own estimate, unit switcher) need far
//! more room than a binary vote pair.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for quantity node plans.
pub struct QuantityPlans;

impl PlanProvider for QuantityPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Quantity
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Quantity),
            ViewMode::Preview,
            RegionRatios::new(0.65, 0.20, 0.15),
        )
        .with_anchor("main-text", Region::ContentText, 0.40)
        .with_anchor("unit-label", Region::ContentText, 0.80)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("consensus-summary", Region::ContentVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Quantity),
            ViewMode::Detail,
            RegionRatios::new(0.20, 0.10, 0.70),
        )
        .with_anchor("main-text", Region::ContentText, 0.40)
        .with_anchor("unit-label", Region::ContentText, 0.85)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("distribution", Region::ContentVoting, 0.25)
        .with_anchor("own-estimate", Region::ContentVoting, 0.60)
        .with_anchor("unit-switcher", Region::ContentVoting, 0.88)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detail_content_voting_share() {
        let detail = QuantityPlans.detail();
        assert_eq!(detail.ratios.content_voting, 0.70);
        assert!((detail.ratios.sum() - 1.0).abs() < 1e-5);
    }
}
