//! Error and warning types shared by the locator stages.
//!
//! Fatal problems (malformed geometry, impossible calibration targets, grids
//! that cannot be built) are [`LocatorError`]s and abort the run. Conditions
//! that still allow a result, such as a maximum sitting on the grid edge, are
//! reported as [`FusionWarning`]s inside the result.

use serde::Serialize;
use thiserror::Error;

pub type LocatorResult<T> = Result<T, LocatorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocatorError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid calibration for {target}: {reason}")]
    InvalidCalibration {
        target: &'static str,
        reason: String,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("grid of {columns}x{rows} points exceeds the cap of {max_points}")]
    GridTooLarge {
        columns: usize,
        rows: usize,
        max_points: usize,
    },
}

impl LocatorError {
    pub(crate) fn calibration(target: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidCalibration {
            target,
            reason: reason.into(),
        }
    }
}

/// Non-fatal conditions attached to an extraction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FusionWarning {
    /// At least one maximizing point lies on the grid boundary; the true
    /// maximum may be outside the sampled region.
    GridCoverageWarning { boundary_points: usize },
    /// The fused field is zero (or non-finite) everywhere.
    DegeneratePosterior,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_target() {
        let err = LocatorError::calibration("gate", "mode must be below mean");
        assert_eq!(
            err.to_string(),
            "invalid calibration for gate: mode must be below mean"
        );
    }

    #[test]
    fn warnings_serialize_with_kind_tag() {
        let w = FusionWarning::GridCoverageWarning { boundary_points: 2 };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"kind\":\"gridCoverageWarning\""), "{json}");
        assert!(json.contains("\"boundary_points\":2"), "{json}");
    }
}
