use super::normal::{log_normal_pdf, normal_cdf, normal_pdf, normal_quantile};
use serde::{Deserialize, Serialize};

/// Zero-mean Gaussian over an unsigned distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub sigma: f64,
}

impl GaussianParams {
    pub(crate) fn centered(sigma: f64) -> Self {
        Self { mean: 0.0, sigma }
    }

    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x - self.mean, self.sigma)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        normal_cdf((x - self.mean) / self.sigma)
    }

    /// Density at the mean.
    pub fn peak(&self) -> f64 {
        self.pdf(self.mean)
    }
}

/// Log-normal distribution parameters (of the underlying normal).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogNormalParams {
    pub mu: f64,
    pub sigma: f64,
}

impl LogNormalParams {
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        log_normal_pdf(x, self.mu, self.sigma)
    }

    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    pub fn mode(&self) -> f64 {
        (self.mu - self.sigma * self.sigma).exp()
    }

    pub fn quantile(&self, p: f64) -> f64 {
        (self.mu + self.sigma * normal_quantile(p)).exp()
    }
}
