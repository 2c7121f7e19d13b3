#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod locator;
pub mod types;

// Building blocks, usable on their own.
pub mod calibrate;
pub mod evidence;
pub mod fusion;
pub mod geometry;

// Tool-side helpers for the demo binaries.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: locator + results.
pub use crate::error::{FusionWarning, LocatorError, LocatorResult};
pub use crate::evidence::{Evidence, EvidenceSet, EvidenceSource, SourceKind};
pub use crate::locator::{Locator, LocatorParams};
pub use crate::types::{LocationResult, Point2D};

// Detailed report returned by the locator.
pub use crate::diagnostics::{LocationReport, TimingBreakdown};

// Calibration and distance helpers that are generally useful.
pub use crate::calibrate::{gaussian_sigma_from_interval, log_normal_params_from_mean_mode};
pub use crate::geometry::{distance_to_polyline, Polyline};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use evidence_locator::prelude::*;
///
/// # fn main() -> Result<(), LocatorError> {
/// let evidence = Evidence::new(
///     vec![Point2D::new(0.0, 0.0), Point2D::new(10_000.0, 0.0)],
///     vec![Point2D::new(5_000.0, -5_000.0), Point2D::new(5_000.0, 5_000.0)],
///     Point2D::new(5_000.0, 3_900.0),
///     CalibrationTargets::default(),
/// )?;
///
/// let report = Locator::new(LocatorParams::default()).locate(&evidence)?;
/// println!("mode={:?} reliable={}", report.result.mode, report.result.reliable);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::calibrate::CalibrationTargets;
    pub use crate::{Evidence, LocationReport, Locator, LocatorError, LocatorParams, Point2D};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::fusion::{
        construct_grid, credible_regions, evaluate, extract_mode, refine_mode, sample_points,
        CredibleRegion, DensityField, EvaluatedFields, Extraction, Grid, RefinedMode,
    };
}
