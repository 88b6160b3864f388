//! Text formatting for report panels.
//!
//! Everything here is pure: values in, strings out. Rounding for display
//! happens only in this module.

use polars::prelude::DataFrame;

use shop_common::format_fixed;
use shop_model::{ColumnSummary, DensityPoint, HistogramBin, HistogramBins, SummaryStatistics};
use shop_stats::{FieldMap, Panel, kind_of_dtype};

/// Header of the descriptive statistics table, in the order numeric and
/// categorical rows share.
pub const DESCRIBE_HEADER: [&str; 12] = [
    "Column", "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max",
];

/// Rendered in place of a statistic that exists but is undefined.
pub const UNDEFINED: &str = "NaN";

/// Rendered for a panel whose column is absent.
pub const NOT_AVAILABLE: &str = "n/a";

/// `"{a} : {b}"`.
pub fn format_ratio((first, second): (usize, usize)) -> String {
    format!("{first} : {second}")
}

/// Percentage with one decimal place and a trailing `%`.
pub fn format_share(percent: f64) -> String {
    format!("{}%", format_fixed(percent, 1))
}

/// Fixed-point value, or [`UNDEFINED`].
pub fn format_stat(value: Option<f64>, precision: u32) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| format_fixed(v, precision))
}

/// One-line rendering of a scalar panel.
pub fn panel_text<T>(panel: &Panel<T>, render: impl FnOnce(&T) -> String) -> String {
    match panel {
        Panel::Ready(value) => render(value),
        Panel::Absent => NOT_AVAILABLE.to_string(),
        Panel::Failed(error) => format!("error: {error}"),
    }
}

/// Row of the descriptive statistics table, aligned with
/// [`DESCRIBE_HEADER`]. Statistics that do not apply to the column's kind
/// are blank.
pub fn describe_row(stats: &SummaryStatistics, precision: u32) -> Vec<String> {
    let blank = String::new;
    let mut row = vec![stats.column.clone(), stats.count().to_string()];
    match &stats.summary {
        ColumnSummary::Numeric(summary) => {
            row.extend([blank(), blank(), blank()]);
            row.extend(
                [
                    summary.mean,
                    summary.std,
                    summary.min,
                    summary.p25,
                    summary.p50,
                    summary.p75,
                    summary.max,
                ]
                .into_iter()
                .map(|value| format_stat(value, precision)),
            );
        }
        ColumnSummary::Categorical(summary) => {
            row.push(summary.unique.to_string());
            row.push(summary.top.clone().unwrap_or_else(|| UNDEFINED.to_string()));
            row.push(summary.freq.map_or_else(|| UNDEFINED.to_string(), |f| f.to_string()));
            row.extend(std::iter::repeat_with(blank).take(7));
        }
    }
    row
}

/// `[column, dtype, kind, field]` for every column of `table`.
pub fn schema_rows(table: &DataFrame, fields: &FieldMap) -> Vec<[String; 4]> {
    table
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().to_string();
            let field = fields
                .field_for(&name)
                .map_or_else(|| "-".to_string(), |field| field.label().to_string());
            [
                name,
                column.dtype().to_string(),
                kind_of_dtype(column.dtype()).to_string(),
                field,
            ]
        })
        .collect()
}

/// Interval label for a bin; the last bin is closed.
pub fn bin_label(bin: &HistogramBin, is_last: bool, precision: u32) -> String {
    let close = if is_last { ']' } else { ')' };
    format!(
        "[{}, {}{close}",
        format_fixed(bin.lower, precision),
        format_fixed(bin.upper, precision)
    )
}

/// Bar of `width` cells scaled so `max_count` fills it.
pub fn histogram_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max_count);
    "█".repeat(cells)
}

/// Density curve, scaled to histogram counts, at each bin center.
///
/// The density is interpolated linearly between the two nearest curve
/// points.
pub fn density_counts(histogram: &HistogramBins, curve: &[DensityPoint]) -> Vec<Option<f64>> {
    let total = histogram.total();
    let width = histogram.bin_width();
    histogram
        .bins
        .iter()
        .map(|bin| {
            let x = bin.center();
            interpolate(curve, x).map(|density| DensityPoint { x, density }.as_count(total, width))
        })
        .collect()
}

fn interpolate(curve: &[DensityPoint], x: f64) -> Option<f64> {
    let first = curve.first()?;
    let last = curve.last()?;
    if x <= first.x {
        return Some(first.density);
    }
    if x >= last.x {
        return Some(last.density);
    }
    let upper = curve.partition_point(|point| point.x < x);
    let (a, b) = (&curve[upper - 1], &curve[upper]);
    if b.x == a.x {
        return Some(a.density);
    }
    let t = (x - a.x) / (b.x - a.x);
    Some(a.density + t * (b.density - a.density))
}
