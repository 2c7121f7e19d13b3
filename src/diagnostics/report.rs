use super::timing::TimingBreakdown;
use crate::error::FusionWarning;
use crate::evidence::SourceKind;
use crate::fusion::{CredibleRegion, Grid, RefinedMode};
use crate::types::{LocationResult, Point2D};
use serde::Serialize;

/// Calibrated parameters and field statistics for one source.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub kind: SourceKind,
    /// Gaussian sigma, or log-normal sigma for the gate.
    pub sigma: f64,
    /// Log-normal mu; `None` for the Gaussian sources.
    pub mu: Option<f64>,
    pub support_radius_m: f64,
    /// Largest value the source attains on the grid.
    pub grid_max: f64,
    /// Value of the source at the fused mode.
    pub value_at_mode: Option<f64>,
}

/// Size and placement of the sampling lattice.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDescriptor {
    pub origin: Point2D,
    pub step_m: f64,
    pub columns: usize,
    pub rows: usize,
    pub points: usize,
}

impl From<&Grid> for GridDescriptor {
    fn from(grid: &Grid) -> Self {
        Self {
            origin: grid.origin(),
            step_m: grid.step(),
            columns: grid.columns(),
            rows: grid.rows(),
            points: grid.len(),
        }
    }
}

/// Everything a renderer or a caller deciding on a re-run needs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReport {
    pub result: LocationResult,
    pub grid: GridDescriptor,
    pub sources: Vec<SourceSummary>,
    /// Grid points tied for the maximum, row-major.
    pub ties: Vec<Point2D>,
    pub tie_centroid: Option<Point2D>,
    pub refined: Option<RefinedMode>,
    /// Maximum of the normalized fused field (per m²).
    pub peak_density: Option<f64>,
    pub regions: Vec<CredibleRegion>,
    pub warnings: Vec<FusionWarning>,
    pub timing: TimingBreakdown,
}

impl LocationReport {
    pub fn has_coverage_warning(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, FusionWarning::GridCoverageWarning { .. }))
    }
}
