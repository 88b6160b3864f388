//! Configuration options for a report pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::KnownField;

/// Number of histogram bins used when none is configured.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Number of points sampled along a density curve.
pub const DEFAULT_DENSITY_GRID: usize = 200;

/// Options for the smoothed density curve drawn over the age histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityOptions {
    /// Compute the curve at all.
    pub enabled: bool,
    /// Number of evenly spaced sample points across the histogram range.
    pub grid_size: usize,
}

impl Default for DensityOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            grid_size: DEFAULT_DENSITY_GRID,
        }
    }
}

/// Options controlling a report pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Number of equal-width histogram bins.
    pub bin_count: usize,

    /// Density curve settings.
    pub density: DensityOptions,

    /// Decimal places used when a renderer rounds numbers for display.
    ///
    /// The computed values themselves are never rounded.
    pub precision: u32,

    /// Explicit column names for known fields.
    ///
    /// Fields without an override are matched against their header aliases.
    pub column_overrides: BTreeMap<KnownField, String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            density: DensityOptions::default(),
            precision: 1,
            column_overrides: BTreeMap::new(),
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    #[must_use]
    pub fn with_density(mut self, enabled: bool) -> Self {
        self.density.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_density_grid(mut self, grid_size: usize) -> Self {
        self.density.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Use `column` for `field` instead of alias matching.
    #[must_use]
    pub fn with_column(mut self, field: KnownField, column: impl Into<String>) -> Self {
        self.column_overrides.insert(field, column.into());
        self
    }

    /// Explicit column name configured for `field`.
    pub fn column_override(&self, field: KnownField) -> Option<&str> {
        self.column_overrides.get(&field).map(String::as_str)
    }
}
