//! Iso-lines of a density field via marching squares.
//!
//! Each grid cell is classified by which corners lie at or above the level.
//! Crossing points are linearly interpolated along cell edges. Saddle cells
//! (four crossings) are resolved with the cell-centre average: corners that
//! disagree with the centre are cut off.

use super::field::DensityField;
use crate::types::Point2D;
use serde::Serialize;

/// Straight piece of an iso-line inside one cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContourSegment {
    pub a: Point2D,
    pub b: Point2D,
}

// Cell edges, counter-clockwise from the bottom.
const BOTTOM: usize = 0;
const RIGHT: usize = 1;
const TOP: usize = 2;
const LEFT: usize = 3;

// Corners in the same order: (0,0), (1,0), (1,1), (0,1), each with its two edges.
const CORNER_EDGES: [[usize; 2]; 4] = [[BOTTOM, LEFT], [BOTTOM, RIGHT], [RIGHT, TOP], [TOP, LEFT]];

/// All iso-line pieces at `level`, cell by cell in row-major order.
pub fn iso_segments(field: &DensityField, level: f64) -> Vec<ContourSegment> {
    let grid = field.grid();
    let mut out = Vec::new();
    for row in 0..grid.rows() - 1 {
        for col in 0..grid.columns() - 1 {
            let corners = [
                (grid.point(col, row), field.get(col, row)),
                (grid.point(col + 1, row), field.get(col + 1, row)),
                (grid.point(col + 1, row + 1), field.get(col + 1, row + 1)),
                (grid.point(col, row + 1), field.get(col, row + 1)),
            ];
            cell_segments(&corners, level, &mut out);
        }
    }
    out
}

fn cell_segments(corners: &[(Point2D, f64); 4], level: f64, out: &mut Vec<ContourSegment>) {
    let inside: [bool; 4] = std::array::from_fn(|i| corners[i].1 >= level);
    if inside.iter().all(|&b| b) || inside.iter().all(|&b| !b) {
        return;
    }

    // Edge i joins corner i and corner (i + 1) % 4.
    let mut crossing: [Option<Point2D>; 4] = [None; 4];
    for (edge, slot) in crossing.iter_mut().enumerate() {
        let (pa, va) = corners[edge];
        let (pb, vb) = corners[(edge + 1) % 4];
        if inside[edge] != inside[(edge + 1) % 4] {
            let t = if (vb - va).abs() > f64::MIN_POSITIVE {
                ((level - va) / (vb - va)).clamp(0.0, 1.0)
            } else {
                0.5
            };
            *slot = Some(Point2D::new(pa.x + t * (pb.x - pa.x), pa.y + t * (pb.y - pa.y)));
        }
    }

    let crossed: Vec<Point2D> = crossing.iter().flatten().copied().collect();
    if crossed.len() == 2 {
        out.push(ContourSegment {
            a: crossed[0],
            b: crossed[1],
        });
        return;
    }

    let centre_inside = corners.iter().map(|(_, v)| v).sum::<f64>() * 0.25 >= level;
    for (corner, edges) in CORNER_EDGES.iter().enumerate() {
        if inside[corner] != centre_inside {
            if let (Some(a), Some(b)) = (crossing[edges[0]], crossing[edges[1]]) {
                out.push(ContourSegment { a, b });
            }
        }
    }
}
