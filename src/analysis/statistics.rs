//! Region statistics: mean color and the selection diff score
//!
//! The diff score ranks regions for splitting. It is the NTSC-luminance
//! weighting of the region's mean channel values; brighter regions score
//! higher and deviate further from the population average, which is what
//! the selection heuristic keys on. Alpha is ignored throughout.

use crate::math::luminance::ntsc_luminance;
use crate::spatial::Rect;
use image::{Rgba, RgbaImage};

/// Per-channel arithmetic means over a region's pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanColor {
    /// Mean red channel value in [0, 255]
    pub r: f64,
    /// Mean green channel value in [0, 255]
    pub g: f64,
    /// Mean blue channel value in [0, 255]
    pub b: f64,
}

impl MeanColor {
    /// Perceived brightness of the mean color
    pub fn luminance(&self) -> f64 {
        ntsc_luminance(self.r, self.g, self.b)
    }
}

/// Statistics cached on a region at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    /// Mean color over the region's pixels
    pub mean: MeanColor,
    /// Scalar ranking score, never recomputed after construction
    pub diff_score: f64,
}

/// Compute mean color and diff score for a rectangle of the buffer
///
/// Pure and deterministic; a single O(width x height) pass over the
/// rectangle. The caller guarantees the rectangle lies inside the buffer
/// with both dimensions at least one.
pub fn compute_region_stats(buffer: &RgbaImage, rect: &Rect) -> RegionStats {
    let mut r_sum = 0.0_f64;
    let mut g_sum = 0.0_f64;
    let mut b_sum = 0.0_f64;

    for row in rect.y..rect.y + rect.height {
        for col in rect.x..rect.x + rect.width {
            let Rgba([r, g, b, _]) = *buffer.get_pixel(col, row);
            r_sum += f64::from(r);
            g_sum += f64::from(g);
            b_sum += f64::from(b);
        }
    }

    // Upstream validation refuses zero-area rectangles; the max keeps the
    // division defined regardless.
    let count = rect.area().max(1) as f64;
    let mean = MeanColor {
        r: r_sum / count,
        g: g_sum / count,
        b: b_sum / count,
    };

    RegionStats {
        mean,
        diff_score: mean.luminance(),
    }
}
