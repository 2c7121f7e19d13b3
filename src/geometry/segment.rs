use crate::types::Point2D;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One straight piece of a polyline, from `p0` to `p1`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point2D,
    pub p1: Point2D,
    #[serde(skip)]
    delta: OnceLock<Vector2<f64>>,
    #[serde(skip)]
    length_sq: OnceLock<f64>,
}

impl Segment {
    pub fn new(p0: Point2D, p1: Point2D) -> Self {
        Self {
            p0,
            p1,
            delta: OnceLock::new(),
            length_sq: OnceLock::new(),
        }
    }

    fn delta(&self) -> Vector2<f64> {
        *self
            .delta
            .get_or_init(|| self.p1.to_vector() - self.p0.to_vector())
    }

    pub fn length_sq(&self) -> f64 {
        *self.length_sq.get_or_init(|| self.delta().norm_squared())
    }

    /// Point of the segment closest to `p`. The projection parameter is
    /// clamped to [0, 1] so points beyond either end snap to that endpoint.
    pub fn closest_point(&self, p: &Point2D) -> Point2D {
        let len_sq = self.length_sq();
        if len_sq <= f64::EPSILON {
            return self.p0;
        }
        let d = self.delta();
        let t = ((p.to_vector() - self.p0.to_vector()).dot(&d) / len_sq).clamp(0.0, 1.0);
        Point2D::from_vector(self.p0.to_vector() + d * t)
    }

    /// Euclidean distance from `p` to the segment (not the infinite line).
    pub fn distance_to(&self, p: &Point2D) -> f64 {
        self.closest_point(p).distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perpendicular_projection_inside_span() {
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        assert!(approx_eq(seg.distance_to(&Point2D::new(4.0, 3.0)), 3.0));
        assert!(approx_eq(seg.distance_to(&Point2D::new(4.0, -3.0)), 3.0));
    }

    #[test]
    fn projection_outside_span_uses_endpoint() {
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0));
        // Infinite-line distance would be 4; the segment end is 5 away.
        assert!(approx_eq(seg.distance_to(&Point2D::new(13.0, 4.0)), 5.0));
        assert!(approx_eq(seg.distance_to(&Point2D::new(-3.0, -4.0)), 5.0));
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let p = Point2D::new(2.0, 2.0);
        let seg = Segment::new(p, p);
        assert!(approx_eq(seg.length_sq(), 0.0));
        assert!(approx_eq(seg.distance_to(&Point2D::new(5.0, 6.0)), 5.0));
    }
}
