//! Coarse-to-fine refinement of the grid maximum.
//!
//! Starting from the grid mode, each level samples a small square lattice
//! around the current best point with a shrinking step and moves to the best
//! sample. Candidates outside `bounds` are ignored, so the refined point never
//! leaves the region the grid was built for. Only strict improvements move
//! the estimate, which keeps the result deterministic.

use super::options::RefineOptions;
use crate::geometry::BoundingBox;
use crate::types::Point2D;
use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedMode {
    pub point: Point2D,
    pub value: f64,
    /// Lattice step of the last level; the estimate is within about half of
    /// it from the local maximum.
    pub final_step: f64,
    pub levels: usize,
}

pub fn refine_mode<F>(
    objective: F,
    start: Point2D,
    coarse_step: f64,
    bounds: &BoundingBox,
    options: &RefineOptions,
) -> RefinedMode
where
    F: Fn(&Point2D) -> f64,
{
    let mut best = start;
    let mut best_value = objective(&start);
    let mut step = coarse_step;
    let shrink = options.shrink.clamp(1e-3, 0.999);
    let half = options.half_window.max(1) as i64;

    for level in 0..options.levels {
        step *= shrink;
        let centre = best;
        for j in -half..=half {
            for i in -half..=half {
                let p = Point2D::new(centre.x + i as f64 * step, centre.y + j as f64 * step);
                if !bounds.contains(&p) {
                    continue;
                }
                let v = objective(&p);
                if v.is_finite() && v > best_value {
                    best = p;
                    best_value = v;
                }
            }
        }
        debug!(
            "fusion::refine level={} step={:.4} best=({:.2}, {:.2}) value={:.6e}",
            level, step, best.x, best.y, best_value
        );
    }

    RefinedMode {
        point: best,
        value: best_value,
        final_step: if options.levels == 0 { coarse_step } else { step },
        levels: options.levels,
    }
}
