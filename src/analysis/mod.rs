//! Per-region color statistics computed from the source buffer

/// Mean color and diff-score computation for canvas rectangles
pub mod statistics;
