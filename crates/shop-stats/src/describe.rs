//! Descriptive statistics for every column of a table.

use polars::prelude::{Column, DataFrame};
use tracing::warn;

use shop_model::{
    CategoricalSummary, ColumnKind, ColumnSummary, FrequencyCount, NumericSummary,
    SummaryStatistics,
};

use crate::error::Result;
use crate::guard::kind_of_dtype;
use crate::numeric::{
    column_category_values, column_numeric_values, mean, min_max, quantile_sorted, sample_std,
    sorted,
};

/// Summarizes every column of `table`, in column order.
///
/// Numeric columns get count, mean, std, min, quartiles and max; all other
/// columns get count, unique, top and freq. A column that cannot be read as
/// its kind falls back to the categorical set instead of failing the table.
pub fn describe_all(table: &DataFrame) -> Vec<SummaryStatistics> {
    table.get_columns().iter().map(describe_column).collect()
}

/// Summarizes a single column.
pub fn describe_column(column: &Column) -> SummaryStatistics {
    let name = column.name().to_string();
    let summary = match kind_of_dtype(column.dtype()) {
        ColumnKind::Numeric => match column_numeric_values(column) {
            Ok(values) => ColumnSummary::Numeric(numeric_summary(&values)),
            Err(error) => {
                warn!(column = %name, %error, "numeric summary failed, describing as categorical");
                ColumnSummary::Categorical(categorical_or_empty(column, &name))
            }
        },
        ColumnKind::Categorical => ColumnSummary::Categorical(categorical_or_empty(column, &name)),
    };
    SummaryStatistics {
        column: name,
        summary,
    }
}

/// Numeric formula set over non-missing values.
pub fn numeric_summary(values: &[f64]) -> NumericSummary {
    let ordered = sorted(values);
    let (min, max) = match min_max(values) {
        Some((lo, hi)) => (Some(lo), Some(hi)),
        None => (None, None),
    };
    NumericSummary {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min,
        p25: quantile_sorted(&ordered, 0.25),
        p50: quantile_sorted(&ordered, 0.5),
        p75: quantile_sorted(&ordered, 0.75),
        max,
    }
}

/// Categorical formula set over values in row order; `None` is missing.
pub fn categorical_summary(values: &[Option<String>]) -> CategoricalSummary {
    let counts = FrequencyCount::from_values("", values.iter().map(Option::as_deref));
    let (top, freq) = match counts.top() {
        Some((value, count)) => (Some(value.to_string()), Some(count)),
        None => (None, None),
    };
    CategoricalSummary {
        count: counts.total(),
        unique: counts.len(),
        top,
        freq,
    }
}

fn categorical_or_empty(column: &Column, name: &str) -> CategoricalSummary {
    match categorical_from_column(column) {
        Ok(summary) => summary,
        Err(error) => {
            warn!(column = %name, %error, "categorical summary failed");
            CategoricalSummary::default()
        }
    }
}

fn categorical_from_column(column: &Column) -> Result<CategoricalSummary> {
    let values = column_category_values(column)?;
    Ok(categorical_summary(&values))
}
