//! Normal and log-normal kernels on top of `statrs` special functions.

use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal CDF.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal quantile for `p` in (0, 1); NaN outside the open unit
/// interval.
pub fn normal_quantile(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Zero-mean normal density with standard deviation `sigma`.
#[inline]
pub fn normal_pdf(x: f64, sigma: f64) -> f64 {
    let z = x / sigma;
    FRAC_1_SQRT_2PI / sigma * (-0.5 * z * z).exp()
}

/// Log-normal density; zero on the non-positive half-line.
#[inline]
pub fn log_normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let z = (x.ln() - mu) / sigma;
    FRAC_1_SQRT_2PI / (x * sigma) * (-0.5 * z * z).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_reference_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((normal_cdf(1.959_964) - 0.975).abs() < 1e-7);
        assert!((normal_cdf(-1.0) - 0.158_655_253_9).abs() < 1e-9);
    }

    #[test]
    fn quantile_matches_known_points() {
        assert!(normal_quantile(0.5).abs() < 1e-12);
        assert!((normal_quantile(0.975) - 1.959_964).abs() < 1e-5);
        assert!((normal_quantile(0.025) + 1.959_964).abs() < 1e-5);
        assert!((normal_quantile(0.999) - 3.090_232).abs() < 1e-5);
        assert!(normal_quantile(0.0).is_nan());
        assert!(normal_quantile(1.0).is_nan());
        assert!(normal_quantile(f64::NAN).is_nan());
    }

    #[test]
    fn quantile_inverts_cdf() {
        for &p in &[1e-4, 0.01, 0.1, 0.3, 0.5, 0.77, 0.95, 0.995, 0.9999] {
            let x = normal_quantile(p);
            assert!((normal_cdf(x) - p).abs() < 1e-9, "p={p} x={x}");
        }
    }

    #[test]
    fn densities_are_non_negative() {
        for i in -50..=50 {
            let x = i as f64 * 100.0;
            assert!(normal_pdf(x, 750.0) >= 0.0);
            assert!(log_normal_pdf(x, 8.0, 0.4) >= 0.0);
        }
        assert_eq!(log_normal_pdf(0.0, 8.0, 0.4), 0.0);
        assert!((normal_pdf(0.0, 1.0) - FRAC_1_SQRT_2PI).abs() < 1e-15);
    }
}
