//! Weighted point draws for heat-map overlays.

use super::field::DensityField;
use crate::types::Point2D;
use log::warn;
use rand::distributions::{WeightedError, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Draws `count` grid points with probability proportional to the field
/// value. The same seed always yields the same points. Returns an empty list
/// when the field carries no mass.
pub fn sample_points(field: &DensityField, count: usize, seed: u64) -> Vec<Point2D> {
    if count == 0 {
        return Vec::new();
    }
    // Scaled by the maximum so the weight total stays finite.
    let scale = match field.max() {
        Some(m) if m > 0.0 => 1.0 / m,
        _ => return Vec::new(),
    };
    let weights = field.values().iter().map(|&v| {
        if v.is_finite() && v > 0.0 {
            v * scale
        } else {
            0.0
        }
    });
    let dist = match WeightedIndex::new(weights) {
        Ok(dist) => dist,
        Err(WeightedError::AllWeightsZero) => return Vec::new(),
        Err(err) => {
            warn!("fusion::sample_points cannot build weights: {err}");
            return Vec::new();
        }
    };

    let grid = field.grid();
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| grid.point_at(rng.sample(&dist))).collect()
}
