//! Histogram bins and density curve points.

use serde::{Deserialize, Serialize};

/// One equal-width bin of a histogram.
///
/// Bins are closed-open `[lower, upper)`, except the last bin of a
/// histogram which also includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Midpoint of the bin.
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Equal-width bucketing of a numeric column's observed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBins {
    /// Source column name.
    pub column: String,
    /// Bins in ascending order, contiguous from the column minimum to maximum.
    pub bins: Vec<HistogramBin>,
}

impl HistogramBins {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of values placed in the bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Width shared by every bin.
    pub fn bin_width(&self) -> f64 {
        self.bins.first().map_or(0.0, HistogramBin::width)
    }

    /// Lower bound of the first bin and upper bound of the last.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        Some((first.lower, last.upper))
    }

    /// Largest bin count, used to scale bar renderings.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

/// A sample of a smoothed density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    /// Probability density at `x`.
    pub density: f64,
}

impl DensityPoint {
    /// Density expressed on the count scale of a histogram with `total`
    /// values and bins of `bin_width`.
    pub fn as_count(&self, total: usize, bin_width: f64) -> f64 {
        self.density * total as f64 * bin_width
    }
}
