//! Layout plan types.
//!
//! A plan describes how a node's square content box divides into
//! proportional regions, and where named anchors sit inside those regions.
//! Plans are static configuration - they never change at runtime and are
//! looked up per render by the resolver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use graph_model::{NodeKind, ViewMode};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// The proportional vertical bands of a node's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// The node's text content (word, statement, value, ...)
    ContentText,
    /// Inclusion voting controls (should this node exist?)
    InclusionVoting,
    /// Content voting controls (is this node's content good?)
    ContentVoting,
}

impl Region {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentText => "content_text",
            Self::InclusionVoting => "inclusion_voting",
            Self::ContentVoting => "content_voting",
        }
    }
}

/// Fraction of the content box assigned to each region.
///
/// The sum may be below 1.0 - unused remainder is legal (comment nodes
/// have no content-voting band at all).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RegionRatios {
    /// Fraction for the text band
    pub content_text: f32,
    /// Fraction for the inclusion-voting band
    pub inclusion_voting: f32,
    /// Fraction for the content-voting band
    pub content_voting: f32,
}

impl RegionRatios {
    /// Construct a ratio triple.
    pub const fn new(content_text: f32, inclusion_voting: f32, content_voting: f32) -> Self {
        Self {
            content_text,
            inclusion_voting,
            content_voting,
        }
    }

    /// Fraction for a given region.
    pub fn for_region(&self, region: Region) -> f32 {
        match region {
            Region::ContentText => self.content_text,
            Region::InclusionVoting => self.inclusion_voting,
            Region::ContentVoting => self.content_voting,
        }
    }

    /// Sum of all three fractions.
    pub fn sum(&self) -> f32 {
        self.content_text + self.inclusion_voting + self.content_voting
    }
}

/// A named fractional position within one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Anchor {
    /// Region the anchor lives in
    pub region: Region,
    /// Fractional position within the region (0.0 = top, 1.0 = bottom)
    pub fraction: f32,
}

/// A complete layout plan for one `(kind, mode)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct LayoutPlan {
    /// Kind this plan applies to (`None` for the fallback plan)
    pub kind: Option<NodeKind>,
    /// Display mode this plan applies to
    pub mode: ViewMode,
    /// Region proportions
    pub ratios: RegionRatios,
    /// Named child-placement anchors
    pub anchors: BTreeMap<String, Anchor>,
}

impl LayoutPlan {
    /// Create a plan with no anchors.
    pub fn new(kind: Option<NodeKind>, mode: ViewMode, ratios: RegionRatios) -> Self {
        Self {
            kind,
            mode,
            ratios,
            anchors: BTreeMap::new(),
        }
    }

    /// Builder: add an anchor.
    pub fn with_anchor(mut self, name: &str, region: Region, fraction: f32) -> Self {
        self.anchors.insert(
            name.to_string(),
            Anchor {
                region,
                fraction: fraction.clamp(0.0, 1.0),
            },
        );
        self
    }

    /// Look up an anchor by name.
    pub fn anchor(&self, name: &str) -> Option<&Anchor> {
        self.anchors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_sum() {
        let ratios = RegionRatios::new(0.4, 0.25, 0.3);
        assert!((ratios.sum() - 0.95).abs() < 1e-5);
    }

    #[test]
    fn test_anchor_fraction_clamped() {
        let plan = LayoutPlan::new(
            Some(NodeKind::Word),
            ViewMode::Detail,
            RegionRatios::new(0.4, 0.25, 0.3),
        )
        .with_anchor("title", Region::ContentText, 1.7);

        assert_eq!(plan.anchor("title").unwrap().fraction, 1.0);
    }
}
