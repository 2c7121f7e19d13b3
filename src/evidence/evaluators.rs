use crate::calibrate::{GaussianParams, LogNormalParams};
use crate::geometry::Polyline;
use crate::types::Point2D;

/// Gaussian density of the unsigned distance from `p` to the river.
#[inline]
pub fn river_density(p: &Point2D, river: &Polyline, params: &GaussianParams) -> f64 {
    params.pdf(river.distance_to(p))
}

/// Log-normal density of the distance from `p` to the gate. Zero at the gate.
#[inline]
pub fn gate_density(p: &Point2D, gate: &Point2D, params: &LogNormalParams) -> f64 {
    params.pdf(p.distance(gate))
}

/// Gaussian density of the unsigned distance from `p` to the satellite track.
#[inline]
pub fn satellite_density(p: &Point2D, path: &Polyline, params: &GaussianParams) -> f64 {
    params.pdf(path.distance_to(p))
}
