use super::grid::Grid;
use serde::Serialize;

/// One non-negative value per grid point, row-major.
#[derive(Clone, Debug, Serialize)]
pub struct DensityField {
    grid: Grid,
    values: Vec<f64>,
}

impl DensityField {
    /// Wraps `values`; the length must match the grid.
    pub fn new(grid: Grid, values: Vec<f64>) -> Self {
        debug_assert_eq!(
            values.len(),
            grid.len(),
            "field length {} must match grid size {}",
            values.len(),
            grid.len()
        );
        Self { grid, values }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.values[self.grid.index(col, row)]
    }

    /// Largest finite value, or `None` if nothing is finite.
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    /// Sum of finite values.
    pub fn sum(&self) -> f64 {
        self.values.iter().filter(|v| v.is_finite()).sum()
    }

    /// Riemann estimate of the integral over the grid.
    pub fn integral(&self) -> f64 {
        self.sum() * self.grid.cell_area()
    }

    /// Rescales to a proper density (integrates to one over the grid).
    /// `None` when the integral is zero or not finite.
    pub fn normalized(&self) -> Option<DensityField> {
        let z = self.integral();
        if !z.is_finite() || z <= 0.0 {
            return None;
        }
        Some(DensityField {
            grid: self.grid,
            values: self
                .values
                .iter()
                .map(|v| if v.is_finite() { v / z } else { 0.0 })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point2D;

    #[test]
    fn normalization_integrates_to_one() {
        let grid = Grid::new(Point2D::default(), 2.0, 3, 2).unwrap();
        let field = DensityField::new(grid, vec![1.0, 2.0, 3.0, 0.0, 2.0, 0.0]);
        assert_eq!(field.sum(), 8.0);
        assert_eq!(field.max(), Some(3.0));
        let norm = field.normalized().unwrap();
        assert!((norm.integral() - 1.0).abs() < 1e-12);
        assert!((norm.get(2, 0) - 3.0 / 32.0).abs() < 1e-15);
    }

    #[test]
    fn zero_field_has_no_normalization() {
        let grid = Grid::new(Point2D::default(), 1.0, 2, 2).unwrap();
        let field = DensityField::new(grid, vec![0.0; 4]);
        assert!(field.normalized().is_none());
        assert_eq!(field.max(), Some(0.0));
    }
}
