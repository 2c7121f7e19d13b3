//! Grid sampler and fusion engine.
//!
//! The engine runs three ordered phases:
//! 1. **Construct** – [`Grid::covering`] lays a regular lattice over the
//!    evidence bounding box padded by the sources' support radii.
//! 2. **Evaluate** – [`evaluate`] samples the three densities at every grid
//!    point and multiplies them (independence assumption; the product is the
//!    posterior under a uniform prior, up to a constant).
//! 3. **Extract** – [`extract_mode`] finds the maximizing point set with a
//!    deterministic tie policy and flags maxima touching the grid boundary.
//!
//! Supporting pieces: [`credible_regions`] (highest-density regions with
//! marching-squares contours), [`refine_mode`] (coarse-to-fine local search
//! around the grid mode) and [`sample_points`] (weighted draws for heat-map
//! layers).
//!
//! Cost is O(points × segments) per polyline source; the grid point cap in
//! [`GridOptions`] bounds the worst case.

pub mod contour;
mod engine;
mod extract;
mod field;
mod grid;
mod options;
mod refine;
mod region;
mod sampling;

pub use contour::{iso_segments, ContourSegment};
pub use engine::{evaluate, evaluate_source, EvaluatedFields};
pub use extract::{extract_mode, Extraction};
pub use field::DensityField;
pub use grid::Grid;
pub use options::{ExtractOptions, GridOptions, RefineOptions};
pub use refine::{refine_mode, RefinedMode};
pub use region::{credible_regions, CredibleRegion};
pub use sampling::sample_points;

use crate::error::LocatorResult;
use crate::evidence::EvidenceSet;

/// Construct phase for a calibrated evidence set.
pub fn construct_grid(set: &EvidenceSet, options: &GridOptions) -> LocatorResult<Grid> {
    let bbox = set.support_bounds(options.margin_scale.max(0.0));
    Grid::covering(&bbox, options)
}
