//! Core decomposition engine
//!
//! A region enters the active set painted, is later selected by the
//! deviation-weighted heuristic, and leaves the set either replaced by four
//! measured children or dropped as a finalized leaf.

/// Greedy split loop, render options, and cancellation
pub mod executor;
/// Quadtree cells with cached statistics
pub mod region;
/// Deviation-weighted candidate selection
pub mod selection;
