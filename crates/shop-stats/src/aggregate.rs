//! Row counts, means and categorical frequency counts.

use polars::prelude::DataFrame;

use shop_model::FrequencyCount;

use crate::error::{Result, StatsError};
use crate::numeric::{category_values, mean, numeric_values};

/// Number of distinct values `gender_ratio` needs.
const RATIO_CATEGORIES: usize = 2;

/// Total number of records. Zero for an empty table.
pub fn row_count(table: &DataFrame) -> usize {
    table.height()
}

/// Arithmetic mean of a numeric column over its non-missing values.
///
/// The result is not rounded; display rounding belongs to the renderer.
///
/// # Errors
///
/// - `InvalidColumnKind` if the column is absent or not numeric.
/// - `EmptyTable` if the column has no values.
pub fn column_mean(table: &DataFrame, column: &str) -> Result<f64> {
    let values = numeric_values(table, column)?;
    mean(&values).ok_or_else(|| StatsError::EmptyTable {
        column: column.to_string(),
    })
}

/// Occurrences of each distinct value of `column`, most frequent first.
///
/// Ties keep the order in which values first appear. Missing values are
/// not counted.
///
/// # Errors
///
/// `InvalidColumnKind` if the column does not exist.
pub fn value_counts(table: &DataFrame, column: &str) -> Result<FrequencyCount> {
    let values = category_values(table, column)?;
    Ok(FrequencyCount::from_values(column, values))
}

/// Counts of the two most frequent values of the gender column, in
/// descending order.
///
/// # Errors
///
/// - `InvalidColumnKind` if the column does not exist.
/// - `InsufficientCategories` if it has fewer than two distinct values.
pub fn gender_ratio(table: &DataFrame, column: &str) -> Result<(usize, usize)> {
    let counts = value_counts(table, column)?;
    leading_pair(&counts)
}

/// Counts of the two leading entries of a frequency count.
pub fn leading_pair(counts: &FrequencyCount) -> Result<(usize, usize)> {
    match counts.entries.as_slice() {
        [(_, first), (_, second), ..] => Ok((*first, *second)),
        _ => Err(StatsError::InsufficientCategories {
            column: counts.column.clone(),
            required: RATIO_CATEGORIES,
            actual: counts.len(),
        }),
    }
}
