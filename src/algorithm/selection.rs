//! Deviation-weighted selection of the next region to split
//!
//! Every call rescans the full active set: the population mean diff score
//! is recomputed, each region is weighted by its squared deviation from
//! that mean times its area, and the strictly greatest weight wins. The
//! heuristic depends on the evolving population average, so nothing is
//! cached between iterations.

use crate::algorithm::region::Region;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Selection weights for every active region
///
/// `weight = (diff_score - population_mean)^2 * area * size_ratio`. A
/// larger `size_ratio` biases selection toward large regions; zero makes
/// every weight zero, which degenerates to first-region selection.
pub fn selection_weights(regions: &[Region], size_ratio: f64) -> Vec<f64> {
    let average = regions.iter().map(Region::diff_score).sum::<f64>() / regions.len() as f64;

    regions
        .iter()
        .map(|region| {
            let deviation = region.diff_score() - average;
            deviation * deviation * region.pixel_count as f64 * size_ratio
        })
        .collect()
}

/// Index of the region with the strictly greatest selection weight
///
/// Ties resolve to the earliest-encountered region: the scan only replaces
/// the current best on a strict greater-than. Returns `None` for an empty
/// active set.
pub fn select_split_candidate(regions: &[Region], size_ratio: f64) -> Option<usize> {
    if regions.is_empty() {
        return None;
    }

    let weights = selection_weights(regions, size_ratio);
    let mut best_index = 0;
    let mut best_weight = f64::NEG_INFINITY;
    for (index, &weight) in weights.iter().enumerate() {
        if weight > best_weight {
            best_weight = weight;
            best_index = index;
        }
    }

    Some(best_index)
}

/// Seeded random selector for the stochastic selection mode
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weight-proportional random selection
    ///
    /// Walks the cumulative distribution of the weights. Degenerate inputs
    /// (empty or all-zero weights) fall back to the first index, matching
    /// the deterministic tie-break.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Pick a region index by weight-proportional draw
    pub fn pick(&mut self, regions: &[Region], size_ratio: f64) -> Option<usize> {
        if regions.is_empty() {
            return None;
        }
        Some(self.weighted_choice(&selection_weights(regions, size_ratio)))
    }
}
