//! Region and anchor placement math.
//!
//! Pure functions used by the rendering host to position children inside a
//! square content box. Region heights are `floor(size * ratio)` stacked
//! top-to-bottom; a fixed spacing constant separates non-empty regions.

use crate::plan::{Anchor, Region, RegionRatios};

/// Vertical gap between two non-empty regions, in pixels.
pub const REGION_SPACING: f32 = 8.0;

/// Top offset and height of one placed region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Absolute top offset within the content box
    pub top: f32,
    /// Region height (0.0 when the region is unused)
    pub height: f32,
}

impl Extent {
    /// Bottom edge of the region.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The three placed regions of a content box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionExtents {
    /// Text band
    pub content_text: Extent,
    /// Inclusion-voting band
    pub inclusion_voting: Extent,
    /// Content-voting band
    pub content_voting: Extent,
}

impl RegionExtents {
    /// Extent for a given region.
    pub fn region(&self, region: Region) -> Extent {
        match region {
            Region::ContentText => self.content_text,
            Region::InclusionVoting => self.inclusion_voting,
            Region::ContentVoting => self.content_voting,
        }
    }
}

/// Stack the plan's regions inside a square box of the given size.
///
/// Zero-ratio regions occupy no height and contribute no spacing.
pub fn region_extents(size: f32, ratios: &RegionRatios, spacing: f32) -> RegionExtents {
    let mut cursor = 0.0;
    let mut extents = RegionExtents::default();

    for region in [
        Region::ContentText,
        Region::InclusionVoting,
        Region::ContentVoting,
    ] {
        let height = (size * ratios.for_region(region)).floor();
        if height <= 0.0 {
            continue;
        }
        if cursor > 0.0 {
            cursor += spacing;
        }
        let extent = Extent {
            top: cursor,
            height,
        };
        match region {
            Region::ContentText => extents.content_text = extent,
            Region::InclusionVoting => extents.inclusion_voting = extent,
            Region::ContentVoting => extents.content_voting = extent,
        }
        cursor += height;
    }

    extents
}

/// Absolute vertical position of an anchor within its region.
pub fn anchor_position(extents: &RegionExtents, anchor: &Anchor) -> f32 {
    let extent = extents.region(anchor.region);
    extent.top + anchor.fraction * extent.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_and_stacking() {
        let ratios = RegionRatios::new(0.4, 0.25, 0.3);
        let extents = region_extents(101.0, &ratios, REGION_SPACING);

        // floor(101 * 0.4) = 40, floor(101 * 0.25) = 25, floor(101 * 0.3) = 30
        assert_eq!(extents.content_text.height, 40.0);
        assert_eq!(extents.inclusion_voting.height, 25.0);
        assert_eq!(extents.content_voting.height, 30.0);

        assert_eq!(extents.content_text.top, 0.0);
        assert_eq!(extents.inclusion_voting.top, 40.0 + REGION_SPACING);
        assert_eq!(
            extents.content_voting.top,
            40.0 + REGION_SPACING + 25.0 + REGION_SPACING
        );
    }

    #[test]
    fn test_empty_region_takes_no_spacing() {
        // Comment-style plan: no content-voting band
        let ratios = RegionRatios::new(0.8, 0.15, 0.0);
        let extents = region_extents(200.0, &ratios, REGION_SPACING);

        assert_eq!(extents.content_voting.height, 0.0);
        assert_eq!(
            extents.inclusion_voting.bottom(),
            160.0 + REGION_SPACING + 30.0
        );
    }

    #[test]
    fn test_anchor_position() {
        let ratios = RegionRatios::new(0.5, 0.5, 0.0);
        let extents = region_extents(100.0, &ratios, 0.0);
        let anchor = Anchor {
            region: Region::InclusionVoting,
            fraction: 0.5,
        };

        assert_eq!(anchor_position(&extents, &anchor), 50.0 + 25.0);
    }
}
