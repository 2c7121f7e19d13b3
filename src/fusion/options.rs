use serde::{Deserialize, Serialize};

/// Options for laying out the sampling grid.
///
/// - `step_m`: spacing between neighbouring grid points in metres.
/// - `margin_scale`: multiplier on the largest source support radius used to
///   pad the evidence bounding box.
/// - `max_points`: hard cap on `columns * rows`; larger grids are rejected.
/// - `parallel`: evaluate rows on the rayon thread pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub step_m: f64,
    pub margin_scale: f64,
    pub max_points: usize,
    pub parallel: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            step_m: 100.0,
            margin_scale: 1.0,
            max_points: 4_000_000,
            parallel: true,
        }
    }
}

/// Coarse-to-fine refinement of the grid maximum.
///
/// Each level samples a `(2 * half_window + 1)²` lattice centred on the
/// current best point with the previous step multiplied by `shrink`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    pub levels: usize,
    pub half_window: usize,
    pub shrink: f64,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            levels: 4,
            half_window: 5,
            shrink: 0.25,
        }
    }
}

/// Extraction policy for the fused field.
///
/// - `tie_tolerance`: points within `tie_tolerance * max` of the maximum are
///   treated as tied.
/// - `credible_levels`: probability masses for which high-density regions
///   are reported (each in (0, 1]).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub tie_tolerance: f64,
    pub credible_levels: Vec<f64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tie_tolerance: 1e-12,
            credible_levels: vec![0.5, 0.9],
        }
    }
}
