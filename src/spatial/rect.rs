//! Axis-aligned integer rectangles on the working canvas
//!
//! Splitting divides a rectangle into four quadrants along both axes. Odd
//! dimensions leave a one-pixel remainder per axis which is always absorbed
//! by the right/bottom children, so the four child areas sum exactly to the
//! parent area regardless of parity.

use ndarray::Array2;

/// Axis-aligned rectangle in canvas coordinates
///
/// Valid rectangles have `width >= 1` and `height >= 1` and lie fully inside
/// the working canvas; engine validation rejects anything else before a
/// region is built around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its corner and dimensions
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering an entire canvas of the given dimensions
    pub const fn full_canvas(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Pixel count of the rectangle
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the rectangle lies fully inside a canvas of the given dimensions
    pub const fn contained_in(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.width >= 1
            && self.height >= 1
            && self.x as u64 + self.width as u64 <= canvas_width as u64
            && self.y as u64 + self.height as u64 <= canvas_height as u64
    }

    /// Split into four quadrants, or refuse when the halves are too small
    ///
    /// The halves are the floor of each dimension; the parity remainder goes
    /// to the right/bottom children. Returns `None` when either half
    /// dimension is at or below `minimum_split_width` — the normal terminal
    /// outcome for a leaf, not an error.
    pub const fn split_quadrants(&self, minimum_split_width: u32) -> Option<[Self; 4]> {
        let mw = self.width % 2;
        let mh = self.height % 2;
        let half_w = (self.width - mw) / 2;
        let half_h = (self.height - mh) / 2;

        if half_w <= minimum_split_width || half_h <= minimum_split_width {
            return None;
        }

        Some([
            Self::new(self.x, self.y, half_w, half_h),
            Self::new(self.x + half_w, self.y, half_w + mw, half_h),
            Self::new(self.x, self.y + half_h, half_w, half_h + mh),
            Self::new(self.x + half_w, self.y + half_h, half_w + mw, half_h + mh),
        ])
    }

    /// Add this rectangle's footprint to a per-pixel coverage map
    ///
    /// Out-of-map pixels are ignored; the map dimensions are (height, width).
    pub fn accumulate_coverage(&self, coverage: &mut Array2<u32>) {
        for row in self.y..self.y + self.height {
            for col in self.x..self.x + self.width {
                if let Some(count) = coverage.get_mut([row as usize, col as usize]) {
                    *count += 1;
                }
            }
        }
    }
}

/// Whether a set of rectangles tiles the canvas exactly
///
/// Every pixel of a `canvas_width` x `canvas_height` canvas must be covered
/// by exactly one rectangle: no gaps, no overlaps.
pub fn rects_tile_canvas(rects: &[Rect], canvas_width: u32, canvas_height: u32) -> bool {
    let mut coverage = Array2::<u32>::zeros((canvas_height as usize, canvas_width as usize));
    for rect in rects {
        rect.accumulate_coverage(&mut coverage);
    }
    coverage.iter().all(|&count| count == 1)
}
