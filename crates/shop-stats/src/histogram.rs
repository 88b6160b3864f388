//! Equal-width histogram binning of a numeric column.

use polars::prelude::DataFrame;

use shop_model::{HistogramBin, HistogramBins};

use crate::error::{Result, StatsError};
use crate::numeric::{min_max, numeric_values};

/// Half-width of the range used when every value is identical.
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Buckets the non-missing values of `column` into `bin_count` equal-width
/// bins spanning the observed minimum to maximum.
///
/// Bins are closed-open except the last, which also holds the maximum, so
/// the bin counts always sum to the number of values. When every value is
/// the same `v`, the range becomes `[v - 0.5, v + 0.5]` and the values land
/// in the middle bin.
///
/// # Errors
///
/// - `InvalidColumnKind` if the column is absent or not numeric.
/// - `EmptyTable` if the column has no values.
/// - `InvalidParameter` if `bin_count` is zero or the values are not finite.
pub fn histogram(table: &DataFrame, column: &str, bin_count: usize) -> Result<HistogramBins> {
    let values = numeric_values(table, column)?;
    bin_values(column, &values, bin_count)
}

/// Buckets already-extracted values. See [`histogram`].
pub fn bin_values(column: &str, values: &[f64], bin_count: usize) -> Result<HistogramBins> {
    if bin_count == 0 {
        return Err(StatsError::InvalidParameter {
            name: "bin count",
            reason: "must be at least 1".to_string(),
        });
    }
    let Some((min, max)) = min_max(values) else {
        return Err(StatsError::EmptyTable {
            column: column.to_string(),
        });
    };
    if !min.is_finite() || !max.is_finite() {
        return Err(StatsError::InvalidParameter {
            name: "histogram range",
            reason: format!("values of '{column}' span [{min}, {max}], which is not finite"),
        });
    }

    let (lower, upper) = if min == max {
        (min - DEGENERATE_HALF_WIDTH, max + DEGENERATE_HALF_WIDTH)
    } else {
        (min, max)
    };
    let edges = bin_edges(lower, upper, bin_count);
    let mut counts = vec![0usize; bin_count];
    for &value in values {
        counts[bin_index(&edges, value)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: edges[idx],
            upper: edges[idx + 1],
            count,
        })
        .collect();
    Ok(HistogramBins {
        column: column.to_string(),
        bins,
    })
}

/// `bin_count + 1` ascending edges; the last edge is exactly `upper`.
fn bin_edges(lower: f64, upper: f64, bin_count: usize) -> Vec<f64> {
    let width = (upper - lower) / bin_count as f64;
    let mut edges: Vec<f64> = (0..bin_count)
        .map(|idx| lower + width * idx as f64)
        .collect();
    edges.push(upper);
    edges
}

/// Index of the bin holding `value`, which lies within the edge range.
fn bin_index(edges: &[f64], value: f64) -> usize {
    let bin_count = edges.len() - 1;
    let lower = edges[0];
    let width = (edges[bin_count] - lower) / bin_count as f64;
    let mut idx = (((value - lower) / width).floor().max(0.0) as usize).min(bin_count - 1);
    // Correct for rounding so the comparison against the stored edges decides
    if idx + 1 < bin_count && value >= edges[idx + 1] {
        idx += 1;
    } else if idx > 0 && value < edges[idx] {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use shop_model::ColumnKind;

    #[test]
    fn test_twenty_bins_over_age_range() {
        let ages: Vec<i64> = (18..=70).collect();
        let df = df! { "Age" => &ages }.unwrap();
        let histogram = histogram(&df, "Age", 20).unwrap();

        assert_eq!(histogram.len(), 20);
        assert_eq!(histogram.total(), ages.len());
        assert_eq!(histogram.range(), Some((18.0, 70.0)));
        assert!((histogram.bin_width() - 2.6).abs() < 1e-12);
        // Maximum goes into the closed last bin
        assert!(histogram.bins[19].count >= 1);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let histogram = bin_values("x", &[0.0, 0.1, 0.7, 1.0, 3.3], 7).unwrap();
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        assert_eq!(histogram.total(), 5);
    }

    #[test]
    fn test_edge_value_goes_to_upper_bin() {
        let histogram = bin_values("x", &[0.0, 5.0, 10.0], 2).unwrap();
        let counts: Vec<usize> = histogram.bins.iter().map(|bin| bin.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_constant_column() {
        let histogram = bin_values("Age", &[30.0, 30.0, 30.0], 20).unwrap();
        assert_eq!(histogram.range(), Some((29.5, 30.5)));
        let non_empty: Vec<usize> = histogram
            .bins
            .iter()
            .enumerate()
            .filter(|(_, bin)| bin.count > 0)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(non_empty, vec![10]);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_empty_column() {
        let df = df! {
            "Age" => Vec::<i64>::new(),
            "Label" => Vec::<&str>::new(),
        }
        .unwrap();
        for name in ["Age", "Label"] {
            assert_eq!(
                histogram(&df, name, 20),
                Err(StatsError::EmptyTable {
                    column: name.to_string()
                })
            );
        }
    }

    #[test]
    fn test_rejects_categorical_column() {
        let df = df! { "Gender" => &["F"] }.unwrap();
        assert_eq!(
            histogram(&df, "Gender", 20),
            Err(StatsError::InvalidColumnKind {
                column: "Gender".to_string(),
                expected: ColumnKind::Numeric,
            })
        );
    }

    #[test]
    fn test_zero_bins() {
        assert!(matches!(
            bin_values("x", &[1.0], 0),
            Err(StatsError::InvalidParameter { .. })
        ));
    }
}
