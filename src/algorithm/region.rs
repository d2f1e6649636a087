//! Quadtree cells: a rectangle with statistics cached at construction
//!
//! Regions are immutable once built. A region is created either as the seed
//! covering the whole canvas or as one of exactly four split children, and
//! is destroyed the moment it is selected for splitting or found
//! unsplittable.

use crate::analysis::statistics::{RegionStats, compute_region_stats};
use crate::io::error::{MosaicError, Result};
use crate::spatial::Rect;
use image::RgbaImage;

/// An axis-aligned slice of the working canvas with cached statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// The rectangle this region covers
    pub rect: Rect,
    /// Cached `width * height`, fixed at creation
    pub pixel_count: u64,
    /// Mean color and diff score, computed once from the source buffer
    pub stats: RegionStats,
}

impl Region {
    /// Measure a validated rectangle of the source buffer
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::RegionOutOfBounds`] when the rectangle is not
    /// fully contained in the buffer or has a zero dimension.
    pub fn new(source: &RgbaImage, rect: Rect) -> Result<Self> {
        if !rect.contained_in(source.width(), source.height()) {
            return Err(MosaicError::RegionOutOfBounds {
                rect: (rect.x, rect.y, rect.width, rect.height),
                canvas: (source.width(), source.height()),
            });
        }
        Ok(Self::measured(source, rect))
    }

    // Children of a valid region are valid by construction, so the split
    // path skips the containment check.
    fn measured(source: &RgbaImage, rect: Rect) -> Self {
        Self {
            rect,
            pixel_count: rect.area(),
            stats: compute_region_stats(source, &rect),
        }
    }

    /// Split into four freshly measured children, or refuse
    ///
    /// Refusal (see [`Rect::split_quadrants`]) marks this region as a
    /// permanent leaf; it is a policy outcome, not an error.
    pub fn split(&self, source: &RgbaImage, minimum_split_width: u32) -> Option<[Self; 4]> {
        self.rect
            .split_quadrants(minimum_split_width)
            .map(|quadrants| quadrants.map(|rect| Self::measured(source, rect)))
    }

    /// Diff score cached at construction
    pub const fn diff_score(&self) -> f64 {
        self.stats.diff_score
    }
}
