use super::bounds::BoundingBox;
use super::segment::Segment;
use crate::error::{LocatorError, LocatorResult};
use crate::types::Point2D;
use serde::Serialize;

/// Ordered, open piecewise-linear curve with at least two vertices.
#[derive(Clone, Debug, Serialize)]
pub struct Polyline {
    vertices: Vec<Point2D>,
    #[serde(skip)]
    segments: Vec<Segment>,
}

impl Polyline {
    pub fn new(vertices: Vec<Point2D>) -> LocatorResult<Self> {
        if vertices.len() < 2 {
            return Err(LocatorError::InvalidGeometry(format!(
                "polyline needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }
        if let Some(idx) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(LocatorError::InvalidGeometry(format!(
                "polyline vertex {idx} is not finite"
            )));
        }
        let segments = vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        Ok(Self { vertices, segments })
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounds(&self) -> BoundingBox {
        // Non-empty by construction.
        BoundingBox::from_points(&self.vertices)
            .unwrap_or_else(|| BoundingBox::new(Point2D::default(), Point2D::default()))
    }

    /// Minimum distance from `p` to any segment of the polyline.
    pub fn distance_to(&self, p: &Point2D) -> f64 {
        self.segments
            .iter()
            .map(|s| s.distance_to(p))
            .fold(f64::INFINITY, f64::min)
    }

    /// Copy with the vertex order reversed.
    pub fn reversed(&self) -> Polyline {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        let segments = vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect();
        Polyline { vertices, segments }
    }
}

/// Shortest Euclidean distance from `point` to the polyline given by
/// `vertices`. Fails with `InvalidGeometry` for fewer than two vertices.
pub fn distance_to_polyline(point: &Point2D, vertices: &[Point2D]) -> LocatorResult<f64> {
    if vertices.len() < 2 {
        return Err(LocatorError::InvalidGeometry(format!(
            "polyline needs at least 2 vertices, got {}",
            vertices.len()
        )));
    }
    Ok(vertices
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]).distance_to(point))
        .fold(f64::INFINITY, f64::min))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Polyline {
        Polyline::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 50.0),
            Point2D::new(200.0, -20.0),
            Point2D::new(260.0, 80.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(matches!(
            Polyline::new(vec![Point2D::new(1.0, 1.0)]),
            Err(LocatorError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Polyline::new(vec![Point2D::new(0.0, 0.0), Point2D::new(f64::NAN, 1.0)]),
            Err(LocatorError::InvalidGeometry(_))
        ));
        assert!(distance_to_polyline(&Point2D::default(), &[Point2D::default()]).is_err());
    }

    #[test]
    fn distance_is_zero_exactly_on_segments() {
        let line = zigzag();
        for seg in line.segments() {
            assert_eq!(line.distance_to(&seg.p0), 0.0);
            assert_eq!(line.distance_to(&seg.p1), 0.0);
        }
        assert!(line.distance_to(&Point2D::new(50.0, 25.0)) < 1e-9);
        assert!(line.distance_to(&Point2D::new(50.0, 30.0)) > 0.0);
    }

    #[test]
    fn distance_is_symmetric_under_reversal() {
        let line = zigzag();
        let rev = line.reversed();
        for &(x, y) in &[(10.0, 90.0), (-40.0, -40.0), (150.0, 0.0), (300.0, 300.0)] {
            let p = Point2D::new(x, y);
            let d = line.distance_to(&p);
            assert!(d >= 0.0);
            assert!((d - rev.distance_to(&p)).abs() < 1e-9);
        }
    }

    #[test]
    fn takes_minimum_over_segments() {
        let line = zigzag();
        let p = Point2D::new(200.0, 10.0);
        // Closest to the shared vertex (200, -20) region.
        let expected = line
            .segments()
            .iter()
            .map(|s| s.distance_to(&p))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(line.distance_to(&p), expected);
        assert_eq!(
            distance_to_polyline(&p, line.vertices()).unwrap(),
            expected
        );
    }
}
