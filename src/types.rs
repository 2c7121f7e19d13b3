use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Point in the projected, metre-based plane shared by all evidence sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Result of one locator run, reduced to what a renderer needs.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    /// Grid point with the maximum fused value (lexicographic tie-break).
    pub mode: Option<Point2D>,
    /// Mode after coarse-to-fine local refinement.
    pub refined_mode: Option<Point2D>,
    /// Unnormalized fused value at `refined_mode`.
    pub peak_value: f64,
    /// True when the grid extraction raised no warnings.
    pub reliable: bool,
    pub latency_ms: f64,
}
