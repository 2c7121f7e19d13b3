//! Highest-density credible regions of a fused field.

use super::contour::{iso_segments, ContourSegment};
use super::field::DensityField;
use serde::Serialize;

/// Smallest set of grid cells whose normalized mass reaches `level`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibleRegion {
    pub level: f64,
    /// Mass actually enclosed (≥ `level` up to one cell).
    pub mass: f64,
    /// Smallest unnormalized field value inside the region.
    pub threshold: f64,
    /// `threshold` expressed as a normalized density (per m²).
    pub density_threshold: f64,
    pub cell_count: usize,
    pub area_m2: f64,
    pub contour: Vec<ContourSegment>,
}

/// Computes one region per requested level. Levels outside (0, 1] are
/// skipped, as is everything when the field carries no mass.
pub fn credible_regions(field: &DensityField, levels: &[f64]) -> Vec<CredibleRegion> {
    let total = field.sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }
    let values = field.values();
    let mut order: Vec<usize> = (0..values.len())
        .filter(|&i| values[i].is_finite() && values[i] > 0.0)
        .collect();
    // Descending by value, index breaks ties so the order is reproducible.
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));

    let cell_area = field.grid().cell_area();
    let mut regions = Vec::with_capacity(levels.len());
    for &level in levels {
        if !(level > 0.0 && level <= 1.0) {
            continue;
        }
        let mut mass = 0.0;
        let mut count = 0usize;
        for &idx in &order {
            mass += values[idx] / total;
            count += 1;
            if mass >= level {
                break;
            }
        }
        let threshold = order
            .get(count.saturating_sub(1))
            .map(|&idx| values[idx])
            .unwrap_or(0.0);
        regions.push(CredibleRegion {
            level,
            mass: mass.min(1.0),
            threshold,
            density_threshold: threshold / (total * cell_area),
            cell_count: count,
            area_m2: count as f64 * cell_area,
            contour: iso_segments(field, threshold),
        });
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::grid::Grid;
    use crate::types::Point2D;

    fn peaked_field() -> DensityField {
        let grid = Grid::new(Point2D::new(0.0, 0.0), 1.0, 21, 21).unwrap();
        let values = (0..grid.len())
            .map(|idx| {
                let p = grid.point_at(idx);
                let (dx, dy) = (p.x - 10.0, p.y - 10.0);
                (-(dx * dx + dy * dy) / 18.0).exp()
            })
            .collect();
        DensityField::new(grid, values)
    }

    #[test]
    fn regions_are_nested_and_reach_their_mass() {
        let field = peaked_field();
        let regions = credible_regions(&field, &[0.5, 0.9]);
        assert_eq!(regions.len(), 2);
        let (inner, outer) = (&regions[0], &regions[1]);
        assert!(inner.mass >= 0.5 && outer.mass >= 0.9);
        assert!(inner.cell_count < outer.cell_count);
        assert!(inner.threshold > outer.threshold);
        assert!(!inner.contour.is_empty());
        // Smallest: dropping the last cell must fall below the level.
        let last = inner.threshold / field.sum();
        assert!(inner.mass - last < 0.5);
    }

    #[test]
    fn invalid_levels_and_empty_fields_are_skipped() {
        let field = peaked_field();
        assert!(credible_regions(&field, &[0.0, 1.5]).is_empty());
        let grid = Grid::new(Point2D::default(), 1.0, 3, 3).unwrap();
        let empty = DensityField::new(grid, vec![0.0; 9]);
        assert!(credible_regions(&empty, &[0.5]).is_empty());
    }
}
