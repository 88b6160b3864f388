//! Column value extraction and the numeric formula set.

use polars::prelude::{Column, DataFrame, DataType};

use shop_common::any_to_string;
use shop_model::ColumnKind;

use crate::error::{Result, StatsError};
use crate::guard::kind_of_dtype;

fn lookup<'a>(table: &'a DataFrame, name: &str, expected: ColumnKind) -> Result<&'a Column> {
    table
        .column(name)
        .map_err(|_| StatsError::InvalidColumnKind {
            column: name.to_string(),
            expected,
        })
}

/// Non-missing values of a numeric column, in row order.
///
/// Nulls and NaN are treated as missing. Fails with `InvalidColumnKind` when
/// the column is absent or not numeric, and with `EmptyTable` when it holds
/// no values at all, whatever its dtype. A header-only CSV loads every column
/// as text.
pub fn numeric_values(table: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = lookup(table, name, ColumnKind::Numeric)?;
    if column.len() == 0 || column.null_count() == column.len() {
        return Err(StatsError::EmptyTable {
            column: name.to_string(),
        });
    }
    column_numeric_values(column)
}

pub(crate) fn column_numeric_values(column: &Column) -> Result<Vec<f64>> {
    if kind_of_dtype(column.dtype()) != ColumnKind::Numeric {
        return Err(StatsError::InvalidColumnKind {
            column: column.name().to_string(),
            expected: ColumnKind::Numeric,
        });
    }
    let cast = column.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .collect();
    Ok(values)
}

/// Values of any column as category labels, in row order; `None` is missing.
///
/// Fails with `InvalidColumnKind` only when the column is absent.
pub fn category_values(table: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = lookup(table, name, ColumnKind::Categorical)?;
    column_category_values(column)
}

pub(crate) fn column_category_values(column: &Column) -> Result<Vec<Option<String>>> {
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if value.is_null() {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Ok(values)
}

/// Arithmetic mean, `None` for no values.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator), `None` below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Quantile of ascending `sorted` values with linear interpolation between
/// the closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Smallest and largest value, `None` for no values.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value))),
    )
}

/// Values sorted ascending.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mean;
    use polars::prelude::*;

    #[test]
    fn test_mean_and_std() {
        let values = [25.0, 35.0, 25.0];
        assert!((mean(&values).unwrap() - 28.333_333_333).abs() < 1e-6);
        assert!((sample_std(&values).unwrap() - 5.773_502_691_896_258).abs() < 1e-9);
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std(&[4.0]), None);
    }

    #[test]
    fn test_quantile_linear() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
        assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&values, 0.75), Some(3.25));
        assert_eq!(quantile_sorted(&values, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&values, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[7.0], 0.25), Some(7.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.0, -1.0, 8.0]), Some((-1.0, 8.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_numeric_values_skip_missing() {
        let df = df! { "Age" => &[Some(25i64), None, Some(35)] }.unwrap();
        assert_eq!(numeric_values(&df, "Age").unwrap(), vec![25.0, 35.0]);
    }

    #[test]
    fn test_numeric_values_rejects_text_and_absent() {
        let df = df! { "Gender" => &["F", "M"] }.unwrap();
        assert!(matches!(
            numeric_values(&df, "Gender"),
            Err(StatsError::InvalidColumnKind {
                expected: ColumnKind::Numeric,
                ..
            })
        ));
        assert!(matches!(
            numeric_values(&df, "Age"),
            Err(StatsError::InvalidColumnKind { .. })
        ));
    }

    #[test]
    fn test_numeric_values_empty_before_kind() {
        let header_only = df! { "Age" => Vec::<&str>::new() }.unwrap();
        let blank = df! { "Age" => &[None::<&str>, None] }.unwrap();
        for df in [header_only, blank] {
            assert_eq!(
                numeric_values(&df, "Age"),
                Err(StatsError::EmptyTable {
                    column: "Age".to_string()
                })
            );
        }
    }

    #[test]
    fn test_category_values() {
        let df = df! {
            "Gender" => &[Some("F"), None, Some("M")],
            "Age" => &[25i64, 35, 25],
        }
        .unwrap();
        assert_eq!(
            category_values(&df, "Gender").unwrap(),
            vec![Some("F".to_string()), None, Some("M".to_string())]
        );
        assert_eq!(
            category_values(&df, "Age").unwrap(),
            vec![
                Some("25".to_string()),
                Some("35".to_string()),
                Some("25".to_string())
            ]
        );
    }
}
