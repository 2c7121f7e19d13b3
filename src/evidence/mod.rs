//! Evidence sources and their density evaluators.
//!
//! Three independent statements constrain the location:
//! - the person is near the river (Gaussian in distance to the river course),
//! - at a typical distance from the gate (log-normal in radial distance),
//! - near the satellite ground track (Gaussian in distance to the track).
//!
//! Each evaluator is a pure function of the query point and fixed, calibrated
//! parameters; see [`evaluators`] for the free functions and
//! [`EvidenceSource`] for the tagged variant used by the fusion engine.

pub mod evaluators;
mod source;

pub use evaluators::{gate_density, river_density, satellite_density};
pub use source::{EvidenceSource, SourceKind};

use crate::calibrate::CalibrationTargets;
use crate::error::{LocatorError, LocatorResult};
use crate::geometry::{BoundingBox, Polyline};
use crate::types::Point2D;
use log::debug;
use serde::Serialize;

/// Raw evidence as supplied by the geometry loader: projected polylines, the
/// gate location and the three calibration statements.
#[derive(Clone, Debug)]
pub struct Evidence {
    pub river: Polyline,
    pub satellite_path: Polyline,
    pub gate: Point2D,
    pub targets: CalibrationTargets,
}

impl Evidence {
    /// Validates the geometry. Fails with `InvalidGeometry` on polylines with
    /// fewer than two vertices.
    pub fn new(
        river: Vec<Point2D>,
        satellite_path: Vec<Point2D>,
        gate: Point2D,
        targets: CalibrationTargets,
    ) -> LocatorResult<Self> {
        if !gate.is_finite() {
            return Err(LocatorError::InvalidGeometry(
                "gate coordinates are not finite".to_string(),
            ));
        }
        Ok(Self {
            river: Polyline::new(river)?,
            satellite_path: Polyline::new(satellite_path)?,
            gate,
            targets,
        })
    }

    /// Calibrates all three sources. Any calibration failure aborts.
    pub fn calibrate(&self) -> LocatorResult<EvidenceSet> {
        let river = self.targets.river.calibrate()?;
        let gate = self.targets.gate.calibrate()?;
        let satellite = self.targets.satellite.calibrate()?;
        debug!(
            "Evidence::calibrate river_sigma={:.2} gate_mu={:.4} gate_sigma={:.4} satellite_sigma={:.2}",
            river.sigma, gate.mu, gate.sigma, satellite.sigma
        );
        Ok(EvidenceSet {
            sources: [
                EvidenceSource::RiverProximity {
                    river: self.river.clone(),
                    params: river,
                },
                EvidenceSource::GateRadial {
                    gate: self.gate,
                    params: gate,
                },
                EvidenceSource::SatellitePath {
                    path: self.satellite_path.clone(),
                    params: satellite,
                },
            ],
        })
    }
}

/// The three calibrated sources in fixed order: river, gate, satellite.
#[derive(Clone, Debug, Serialize)]
pub struct EvidenceSet {
    pub sources: [EvidenceSource; 3],
}

impl EvidenceSet {
    pub fn get(&self, kind: SourceKind) -> &EvidenceSource {
        match kind {
            SourceKind::RiverProximity => &self.sources[0],
            SourceKind::GateRadial => &self.sources[1],
            SourceKind::SatellitePath => &self.sources[2],
        }
    }

    /// Per-source densities at `p` in source order.
    #[inline]
    pub fn densities(&self, p: &Point2D) -> [f64; 3] {
        [
            self.sources[0].density(p),
            self.sources[1].density(p),
            self.sources[2].density(p),
        ]
    }

    /// Fused (unnormalized) posterior at `p`.
    ///
    /// Treats the sources as statistically independent, so the joint density
    /// is proportional to the product of the marginals. That independence is
    /// an assumption about the evidence, not something derived here.
    #[inline]
    pub fn fused_density(&self, p: &Point2D) -> f64 {
        self.densities(p).iter().product()
    }

    /// Union of the source geometries, each grown by its support radius.
    pub fn support_bounds(&self, margin_scale: f64) -> BoundingBox {
        let mut bbox = self.sources[0].bounds();
        for src in &self.sources[1..] {
            bbox = bbox.union(&src.bounds());
        }
        let margin = self
            .sources
            .iter()
            .map(|s| s.support_radius())
            .fold(0.0f64, f64::max);
        bbox.expanded(margin * margin_scale)
    }
}
