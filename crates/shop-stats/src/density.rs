//! Gaussian kernel density estimate for smoothing a histogram.
//!
//! The bandwidth follows Scott's rule, `h = σ · n^(-1/5)`, where `σ` is the
//! sample standard deviation. The curve is sampled lazily on an even grid
//! spanning the histogram range.

use std::f64::consts::PI;

use shop_model::DensityPoint;

use crate::error::{Result, StatsError};
use crate::numeric::sample_std;

/// A fitted Gaussian kernel density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits a density to `values` using Scott's bandwidth.
    ///
    /// Returns `None` when the density is undefined: fewer than two values,
    /// non-finite values, or zero spread.
    pub fn fit(values: &[f64]) -> Option<Self> {
        if values.len() < 2 || values.iter().any(|value| !value.is_finite()) {
            return None;
        }
        let std = sample_std(values)?;
        let bandwidth = std * (values.len() as f64).powf(-0.2);
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return None;
        }
        Some(Self {
            samples: values.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimated probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / (self.samples.len() as f64 * h * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|sample| {
                let z = (x - sample) / h;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }

    /// Lazily samples the density at `grid_size` evenly spaced points from
    /// `lower` to `upper` inclusive.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `grid_size < 2` or the range is empty.
    pub fn curve(&self, lower: f64, upper: f64, grid_size: usize) -> Result<DensityCurve<'_>> {
        if grid_size < 2 {
            return Err(StatsError::InvalidParameter {
                name: "density grid size",
                reason: "must be at least 2".to_string(),
            });
        }
        if !(lower.is_finite() && upper.is_finite() && upper > lower) {
            return Err(StatsError::InvalidParameter {
                name: "density range",
                reason: format!("[{lower}, {upper}] is empty"),
            });
        }
        Ok(DensityCurve {
            kde: self,
            lower,
            upper,
            step: (upper - lower) / (grid_size - 1) as f64,
            next: 0,
            len: grid_size,
        })
    }
}

/// Iterator over `(x, density)` samples of a [`GaussianKde`].
#[derive(Debug, Clone)]
pub struct DensityCurve<'a> {
    kde: &'a GaussianKde,
    lower: f64,
    upper: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl Iterator for DensityCurve<'_> {
    type Item = DensityPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let x = if self.next + 1 == self.len {
            self.upper
        } else {
            self.lower + self.step * self.next as f64
        };
        self.next += 1;
        Some(DensityPoint {
            x,
            density: self.kde.pdf(x),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DensityCurve<'_> {}
