//! Per-column descriptive statistics.

use serde::{Deserialize, Serialize};

use crate::field::ColumnKind;

/// Descriptive statistics for one column of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Column name.
    pub column: String,
    /// Statistics for the column's kind.
    pub summary: ColumnSummary,
}

/// Numeric or categorical statistics bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

/// Statistics of a numeric column, computed over non-missing values.
///
/// Every statistic is `None` when it is undefined: all of them for a column
/// without values, and `std` for a column with a single value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of non-missing values.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// 25th percentile, linear interpolation.
    pub p25: Option<f64>,
    /// Median, linear interpolation.
    pub p50: Option<f64>,
    /// 75th percentile, linear interpolation.
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// Statistics of a categorical column, computed over non-missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of non-missing values.
    pub count: usize,
    /// Number of distinct values.
    pub unique: usize,
    /// Most frequent value; ties go to the value seen first.
    pub top: Option<String>,
    /// Occurrences of `top`.
    pub freq: Option<usize>,
}

impl SummaryStatistics {
    pub fn kind(&self) -> ColumnKind {
        match self.summary {
            ColumnSummary::Numeric(_) => ColumnKind::Numeric,
            ColumnSummary::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Number of non-missing values, whatever the kind.
    pub fn count(&self) -> usize {
        match &self.summary {
            ColumnSummary::Numeric(numeric) => numeric.count,
            ColumnSummary::Categorical(categorical) => categorical.count,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match &self.summary {
            ColumnSummary::Numeric(numeric) => Some(numeric),
            ColumnSummary::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalSummary> {
        match &self.summary {
            ColumnSummary::Categorical(categorical) => Some(categorical),
            ColumnSummary::Numeric(_) => None,
        }
    }
}

impl NumericSummary {
    /// Returns true when no statistic beyond the count is defined.
    pub fn is_undefined(&self) -> bool {
        self.mean.is_none()
            && self.std.is_none()
            && self.min.is_none()
            && self.p25.is_none()
            && self.p50.is_none()
            && self.p75.is_none()
            && self.max.is_none()
    }
}
