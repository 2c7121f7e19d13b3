use super::options::GridOptions;
use crate::error::{LocatorError, LocatorResult};
use crate::geometry::BoundingBox;
use crate::types::Point2D;
use serde::Serialize;

/// Regular lattice of sample points; row-major with `x` along columns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    origin: Point2D,
    step: f64,
    columns: usize,
    rows: usize,
}

impl Grid {
    pub fn new(origin: Point2D, step: f64, columns: usize, rows: usize) -> LocatorResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(LocatorError::InvalidGrid(format!(
                "step must be positive and finite, got {step}"
            )));
        }
        if !origin.is_finite() {
            return Err(LocatorError::InvalidGrid("origin is not finite".to_string()));
        }
        if columns < 2 || rows < 2 {
            return Err(LocatorError::InvalidGrid(format!(
                "grid needs at least 2x2 points, got {columns}x{rows}"
            )));
        }
        Ok(Self {
            origin,
            step,
            columns,
            rows,
        })
    }

    /// Smallest lattice with spacing `options.step_m` whose extent covers
    /// `bbox`. The lattice starts at `bbox.min`.
    pub fn covering(bbox: &BoundingBox, options: &GridOptions) -> LocatorResult<Self> {
        let step = options.step_m;
        if !step.is_finite() || step <= 0.0 {
            return Err(LocatorError::InvalidGrid(format!(
                "step must be positive and finite, got {step}"
            )));
        }
        if !bbox.min.is_finite() || !bbox.max.is_finite() {
            return Err(LocatorError::InvalidGrid(
                "bounding box is not finite".to_string(),
            ));
        }
        // Sized in f64 so tiny steps saturate into the cap check instead of
        // overflowing the integer conversion.
        let columns = (bbox.width() / step).ceil().max(1.0) + 1.0;
        let rows = (bbox.height() / step).ceil().max(1.0) + 1.0;
        if columns * rows > options.max_points as f64 {
            return Err(LocatorError::GridTooLarge {
                columns: columns as usize,
                rows: rows as usize,
                max_points: options.max_points,
            });
        }
        Self::new(bbox.min, step, columns as usize, rows as usize)
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cell_area(&self) -> f64 {
        self.step * self.step
    }

    #[inline]
    pub fn point(&self, col: usize, row: usize) -> Point2D {
        Point2D::new(
            self.origin.x + col as f64 * self.step,
            self.origin.y + row as f64 * self.step,
        )
    }

    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.columns + col
    }

    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    pub fn point_at(&self, index: usize) -> Point2D {
        let (col, row) = self.coords(index);
        self.point(col, row)
    }

    pub fn is_boundary(&self, col: usize, row: usize) -> bool {
        col == 0 || row == 0 || col + 1 == self.columns || row + 1 == self.rows
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.origin, self.point(self.columns - 1, self.rows - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_grid_spans_bbox() {
        let bbox = BoundingBox::new(Point2D::new(-1000.0, 0.0), Point2D::new(1050.0, 500.0));
        let opts = GridOptions {
            step_m: 100.0,
            ..Default::default()
        };
        let grid = Grid::covering(&bbox, &opts).unwrap();
        assert_eq!(grid.columns(), 22);
        assert_eq!(grid.rows(), 6);
        let b = grid.bounds();
        assert!(b.max.x >= bbox.max.x && b.max.y >= bbox.max.y);
        assert_eq!(b.min, bbox.min);
    }

    #[test]
    fn index_round_trip_and_boundary() {
        let grid = Grid::new(Point2D::new(10.0, 20.0), 5.0, 4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());
        let idx = grid.index(2, 1);
        assert_eq!(grid.coords(idx), (2, 1));
        assert_eq!(grid.point_at(idx), Point2D::new(20.0, 25.0));
        assert!(grid.is_boundary(0, 1));
        assert!(grid.is_boundary(3, 1));
        assert!(grid.is_boundary(2, 2));
        assert!(!grid.is_boundary(1, 1));
        assert_eq!(grid.cell_area(), 25.0);
    }

    #[test]
    fn rejects_invalid_layouts() {
        assert!(Grid::new(Point2D::default(), 0.0, 4, 4).is_err());
        assert!(Grid::new(Point2D::default(), 1.0, 1, 4).is_err());
        let bbox = BoundingBox::new(Point2D::new(0.0, 0.0), Point2D::new(1.0e6, 1.0e6));
        let opts = GridOptions {
            step_m: 10.0,
            max_points: 1000,
            ..Default::default()
        };
        assert!(matches!(
            Grid::covering(&bbox, &opts),
            Err(LocatorError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn vanishing_step_is_too_large_not_overflow() {
        let bbox = BoundingBox::new(Point2D::new(0.0, 0.0), Point2D::new(30_000.0, 30_000.0));
        let opts = GridOptions {
            step_m: 1e-20,
            ..Default::default()
        };
        match Grid::covering(&bbox, &opts) {
            Err(LocatorError::GridTooLarge {
                columns,
                rows,
                max_points,
            }) => {
                assert_eq!(max_points, opts.max_points);
                assert!(columns > max_points && rows > max_points);
            }
            other => panic!("expected GridTooLarge, got {other:?}"),
        }
    }
}
