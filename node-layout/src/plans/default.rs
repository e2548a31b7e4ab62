//! Fallback layout plans.
//!
//! Used for any kind (or unparsed kind name) without an explicit entry in
//! the resolver's table, so `resolve` stays total.

use crate::plan::{LayoutPlan, Region, RegionRatios};
use graph_model::ViewMode;

/// The fallback plan pair.
pub struct DefaultPlans;

impl DefaultPlans {
    /// Fallback preview plan.
    pub fn preview() -> LayoutPlan {
        LayoutPlan::new(None, ViewMode::Preview, RegionRatios::new(0.75, 0.25, 0.0))
            .with_anchor("main-text", Region::ContentText, 0.50)
            .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
    }

    /// Fallback detail plan.
    pub fn detail() -> LayoutPlan {
        LayoutPlan::new(None, ViewMode::Detail, RegionRatios::new(0.40, 0.25, 0.30))
            .with_anchor("main-text", Region::ContentText, 0.50)
            .with_anchor("inclusion-controls", Region::InclusionVoting, 0.50)
            .with_anchor("content-controls", Region::ContentVoting, 0.50)
    }

    /// Fallback plan for a mode.
    pub fn for_mode(mode: ViewMode) -> LayoutPlan {
        match mode {
            ViewMode::Preview => Self::preview(),
            ViewMode::Detail => Self::detail(),
        }
    }
}
