use super::evaluators::{gate_density, river_density, satellite_density};
use crate::calibrate::{GaussianParams, LogNormalParams};
use crate::geometry::{BoundingBox, Polyline};
use crate::types::Point2D;
use serde::Serialize;

/// Number of standard deviations past which a Gaussian source is treated as
/// negligible when sizing the grid.
const GAUSSIAN_SUPPORT_SIGMAS: f64 = 4.0;
/// Upper log-normal quantile used as the gate's effective support radius.
const LOG_NORMAL_SUPPORT_QUANTILE: f64 = 0.999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    RiverProximity,
    GateRadial,
    SatellitePath,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::RiverProximity => "river",
            SourceKind::GateRadial => "gate",
            SourceKind::SatellitePath => "satellite",
        }
    }
}

/// One calibrated piece of evidence. Immutable once built.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EvidenceSource {
    RiverProximity {
        river: Polyline,
        params: GaussianParams,
    },
    GateRadial {
        gate: Point2D,
        params: LogNormalParams,
    },
    SatellitePath {
        path: Polyline,
        params: GaussianParams,
    },
}

impl EvidenceSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            EvidenceSource::RiverProximity { .. } => SourceKind::RiverProximity,
            EvidenceSource::GateRadial { .. } => SourceKind::GateRadial,
            EvidenceSource::SatellitePath { .. } => SourceKind::SatellitePath,
        }
    }

    /// Density contributed by this source at `p`.
    #[inline]
    pub fn density(&self, p: &Point2D) -> f64 {
        match self {
            EvidenceSource::RiverProximity { river, params } => river_density(p, river, params),
            EvidenceSource::GateRadial { gate, params } => gate_density(p, gate, params),
            EvidenceSource::SatellitePath { path, params } => satellite_density(p, path, params),
        }
    }

    /// Distance from the reference geometry beyond which the density is
    /// negligible.
    pub fn support_radius(&self) -> f64 {
        match self {
            EvidenceSource::RiverProximity { params, .. }
            | EvidenceSource::SatellitePath { params, .. } => {
                GAUSSIAN_SUPPORT_SIGMAS * params.sigma
            }
            EvidenceSource::GateRadial { params, .. } => {
                params.quantile(LOG_NORMAL_SUPPORT_QUANTILE)
            }
        }
    }

    /// Bounding box of the reference geometry (a single point for the gate).
    pub fn bounds(&self) -> BoundingBox {
        match self {
            EvidenceSource::RiverProximity { river, .. } => river.bounds(),
            EvidenceSource::GateRadial { gate, .. } => BoundingBox::new(*gate, *gate),
            EvidenceSource::SatellitePath { path, .. } => path.bounds(),
        }
    }

    /// Largest value the density can take anywhere.
    pub fn peak_density(&self) -> f64 {
        match self {
            EvidenceSource::RiverProximity { params, .. }
            | EvidenceSource::SatellitePath { params, .. } => params.peak(),
            EvidenceSource::GateRadial { params, .. } => params.pdf(params.mode()),
        }
    }
}
