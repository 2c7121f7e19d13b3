use serde::{Deserialize, Serialize};

/// Two-sided interval statement: the quantity lies within `±half_width` of
/// zero with probability `coverage`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalTarget {
    pub half_width: f64,
    #[serde(default = "default_coverage")]
    pub coverage: f64,
}

impl IntervalTarget {
    pub const fn new(half_width: f64, coverage: f64) -> Self {
        Self {
            half_width,
            coverage,
        }
    }
}

fn default_coverage() -> f64 {
    0.95
}

/// Mean and mode of a positive, right-skewed quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanModeTarget {
    pub mean: f64,
    pub mode: f64,
}

impl MeanModeTarget {
    pub const fn new(mean: f64, mode: f64) -> Self {
        Self { mean, mode }
    }
}

/// The three calibration statements of the locator, in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTargets {
    pub river: IntervalTarget,
    pub gate: MeanModeTarget,
    pub satellite: IntervalTarget,
}

impl Default for CalibrationTargets {
    fn default() -> Self {
        Self {
            river: IntervalTarget::new(2730.0, 0.95),
            gate: MeanModeTarget::new(4700.0, 3877.0),
            satellite: IntervalTarget::new(2400.0, 0.95),
        }
    }
}
