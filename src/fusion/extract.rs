//! Extract phase: maximum of the fused field with a deterministic tie policy.
//!
//! Every grid point whose value is within `tie_tolerance * max` of the
//! maximum belongs to the tie set, listed in row-major order. The reported
//! mode is the lexicographically smallest `(x, y)` of the tie set; the
//! centroid of the tie set is reported alongside. A tie point on the grid
//! boundary raises [`FusionWarning::GridCoverageWarning`].

use super::field::DensityField;
use super::options::ExtractOptions;
use crate::error::FusionWarning;
use crate::types::Point2D;
use log::warn;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub max_value: f64,
    pub mode: Option<Point2D>,
    pub centroid: Option<Point2D>,
    pub ties: Vec<Point2D>,
    #[serde(skip)]
    pub tie_indices: Vec<usize>,
    pub warnings: Vec<FusionWarning>,
}

impl Extraction {
    pub fn is_reliable(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn extract_mode(field: &DensityField, options: &ExtractOptions) -> Extraction {
    let max = match field.max() {
        Some(m) if m > 0.0 => m,
        _ => {
            warn!("fusion::extract fused field is zero everywhere");
            return Extraction {
                warnings: vec![FusionWarning::DegeneratePosterior],
                ..Default::default()
            };
        }
    };
    let tol = options.tie_tolerance.max(0.0) * max;
    let grid = field.grid();

    let tie_indices: Vec<usize> = field
        .values()
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && **v >= max - tol)
        .map(|(idx, _)| idx)
        .collect();
    let ties: Vec<Point2D> = tie_indices.iter().map(|&idx| grid.point_at(idx)).collect();

    let mode = ties.iter().copied().min_by(|a, b| lexicographic(a, b));
    let n = ties.len() as f64;
    let centroid = if ties.is_empty() {
        None
    } else {
        let (sx, sy) = ties
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point2D::new(sx / n, sy / n))
    };

    let boundary_points = tie_indices
        .iter()
        .filter(|&&idx| {
            let (col, row) = grid.coords(idx);
            grid.is_boundary(col, row)
        })
        .count();
    let mut warnings = Vec::new();
    if boundary_points > 0 {
        warn!(
            "fusion::extract maximum touches the grid boundary ({} points); result may be clipped",
            boundary_points
        );
        warnings.push(FusionWarning::GridCoverageWarning { boundary_points });
    }

    Extraction {
        max_value: max,
        mode,
        centroid,
        ties,
        tie_indices,
        warnings,
    }
}

fn lexicographic(a: &Point2D, b: &Point2D) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
