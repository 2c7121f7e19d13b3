//! Turns verbal evidence statements into distribution parameters.
//!
//! - Interval statements ("within ±h with probability c") become a zero-mean
//!   Gaussian with `sigma = h / z`, `z = Φ⁻¹((1 + c) / 2)`.
//! - Mean/mode statements become a log-normal via
//!   `mean = exp(mu + sigma²/2)` and `mode = exp(mu - sigma²)`, hence
//!   `sigma² = (2/3)·ln(mean/mode)` and `mu = ln(mode) + sigma²`.
//!
//! Both fail with [`LocatorError::InvalidCalibration`] when no real solution
//! exists; nothing is ever silently defaulted.

pub mod normal;
mod params;
mod targets;

pub use params::{GaussianParams, LogNormalParams};
pub use targets::{CalibrationTargets, IntervalTarget, MeanModeTarget};

use crate::error::{LocatorError, LocatorResult};
use normal::normal_quantile;

/// Standard deviation of a zero-mean Gaussian whose two-sided `coverage`
/// interval is `±half_width`.
pub fn gaussian_sigma_from_interval(half_width: f64, coverage: f64) -> LocatorResult<f64> {
    const TARGET: &str = "gaussian interval";
    if !half_width.is_finite() || half_width <= 0.0 {
        return Err(LocatorError::calibration(
            TARGET,
            format!("half width must be positive and finite, got {half_width}"),
        ));
    }
    if !(coverage > 0.0 && coverage < 1.0) {
        return Err(LocatorError::calibration(
            TARGET,
            format!("coverage must lie in (0, 1), got {coverage}"),
        ));
    }
    let z = normal_quantile(0.5 * (1.0 + coverage));
    if !z.is_finite() || z <= 0.0 {
        return Err(LocatorError::calibration(
            TARGET,
            format!("quantile for coverage {coverage} is not usable"),
        ));
    }
    Ok(half_width / z)
}

/// Log-normal `(mu, sigma)` with the given mean and mode.
pub fn log_normal_params_from_mean_mode(mean: f64, mode: f64) -> LocatorResult<(f64, f64)> {
    const TARGET: &str = "log-normal mean/mode";
    if !mean.is_finite() || !mode.is_finite() {
        return Err(LocatorError::calibration(
            TARGET,
            format!("mean and mode must be finite, got mean={mean} mode={mode}"),
        ));
    }
    if mode <= 0.0 || mean <= 0.0 {
        return Err(LocatorError::calibration(
            TARGET,
            format!("mean and mode must be positive, got mean={mean} mode={mode}"),
        ));
    }
    if mean <= mode {
        return Err(LocatorError::calibration(
            TARGET,
            format!("mean must exceed mode, got mean={mean} mode={mode}"),
        ));
    }
    let r = (mean / mode).ln();
    let sigma_sq = 2.0 * r / 3.0;
    let mu = mode.ln() + sigma_sq;
    Ok((mu, sigma_sq.sqrt()))
}

impl IntervalTarget {
    pub fn calibrate(&self) -> LocatorResult<GaussianParams> {
        gaussian_sigma_from_interval(self.half_width, self.coverage).map(GaussianParams::centered)
    }
}

impl MeanModeTarget {
    pub fn calibrate(&self) -> LocatorResult<LogNormalParams> {
        log_normal_params_from_mean_mode(self.mean, self.mode)
            .map(|(mu, sigma)| LogNormalParams { mu, sigma })
    }
}
