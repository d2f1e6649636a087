//! Adaptive quadtree mosaic generation from raster images
//!
//! The engine recursively partitions an image into axis-aligned rectangles
//! sized by local color non-uniformity: busy areas receive small cells, flat
//! areas large ones. Each accepted cell is painted with its mean color as it
//! is created, so the output refines progressively and remains valid at any
//! cancellation point.

#![forbid(unsafe_code)]

/// Core decomposition engine: regions, selection heuristic, and the greedy split loop
pub mod algorithm;
/// Per-region color statistics computed from the source buffer
pub mod analysis;
/// Input/output operations, painting, and error handling
pub mod io;
/// Numeric utilities for luminance weighting
pub mod math;
/// Rectangle geometry and canvas coverage accounting
pub mod spatial;

pub use io::error::{MosaicError, Result};
