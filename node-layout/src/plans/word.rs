//! Word node layout.
//!
//! Words carry their text plus a definition excerpt, so the text band is
//! wider than on claim-like nodes and content voting targets the living
//! definition rather than the word itself.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use crate::plans::PlanProvider;
use graph_model::{NodeKind, ViewMode};

/// Provider for word node plans.
pub struct WordPlans;

impl PlanProvider for WordPlans {
    fn kind(&self) -> NodeKind {
        NodeKind::Word
    }

    fn preview(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Word),
            ViewMode::Preview,
            RegionRatios::new(0.70, 0.30, 0.0),
        )
        .with_anchor("title", Region::ContentText, 0.35)
        .with_anchor("definition-excerpt", Region::ContentText, 0.75)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    fn detail(&self) -> LayoutPlan {
        LayoutPlan::new(
            Some(NodeKind::Word),
            ViewMode::Detail,
            RegionRatios::new(0.40, 0.25, 0.30),
        )
        .with_anchor("title", Region::ContentText, 0.15)
        .with_anchor("main-text", Region::ContentText, 0.55)
        .with_anchor("tags", Region::ContentText, 0.90)
        .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
        .with_anchor("content-controls", Region::ContentVoting, 0.40)
        .with_anchor("vote-tally", Region::ContentVoting, 0.85)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_plans() {
        let plans = WordPlans;
        assert_eq!(plans.kind(), NodeKind::Word);

        let preview = plans.preview();
        assert_eq!(preview.ratios.content_voting, 0.0);
        assert!(preview.anchor("inclusion-controls").is_some());

        let detail = plans.detail();
        assert!(detail.ratios.sum() <= 1.0);
        assert!(detail.anchor("content-controls").is_some());
    }
}
