//! One report-generation pass over a table.
//!
//! A pass resolves the known fields, then computes each panel
//! independently. A panel backed by an absent field is [`Panel::Absent`];
//! a panel whose computation fails is [`Panel::Failed`] and never stops the
//! other panels from being produced.

use polars::prelude::DataFrame;
use serde::{Serialize, Serializer};
use tracing::{debug, info, info_span, warn};

use shop_model::{
    DensityPoint, FrequencyCount, HistogramBins, KnownField, ReportOptions, SummaryStatistics,
};

use crate::aggregate::{column_mean, leading_pair, row_count, value_counts};
use crate::density::GaussianKde;
use crate::describe::describe_all;
use crate::error::{Result, StatsError};
use crate::guard::FieldMap;
use crate::histogram::bin_values;
use crate::numeric::numeric_values;

/// Outcome of one optional panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Panel<T> {
    /// The panel's column is not in the table, or its precondition is unmet.
    Absent,
    /// The panel was computed.
    Ready(T),
    /// The computation failed.
    #[serde(serialize_with = "serialize_error")]
    Failed(StatsError),
}

fn serialize_error<S: Serializer>(
    error: &StatsError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl<T> Panel<T> {
    /// Computes a panel for an optional column.
    pub fn for_column(
        name: &'static str,
        column: Option<&str>,
        compute: impl FnOnce(&str) -> Result<T>,
    ) -> Self {
        let Some(column) = column else {
            debug!(panel = name, "column absent, skipping panel");
            return Self::Absent;
        };
        Self::from_result(name, compute(column))
    }

    /// Wraps a computation result, logging failures.
    pub fn from_result(name: &'static str, result: Result<T>) -> Self {
        match result {
            Ok(value) => {
                debug!(panel = name, "panel ready");
                Self::Ready(value)
            }
            Err(error) => {
                warn!(panel = name, %error, "panel failed");
                Self::Failed(error)
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&StatsError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Every summary produced by one pass, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    /// Total number of records.
    pub row_count: usize,
    /// Columns backing each known field.
    pub fields: FieldMap,
    /// Unrounded mean age.
    pub mean_age: Panel<f64>,
    /// Counts of the two most frequent genders; absent below two genders.
    pub gender_ratio: Panel<(usize, usize)>,
    pub gender_counts: Panel<FrequencyCount>,
    pub payment_counts: Panel<FrequencyCount>,
    pub age_histogram: Panel<HistogramBins>,
    /// Density curve over the age histogram range.
    pub age_density: Panel<Vec<DensityPoint>>,
    /// One entry per table column, in column order.
    pub describe: Vec<SummaryStatistics>,
}

impl TrendReport {
    /// Number of optional panels that failed.
    pub fn failed_panels(&self) -> usize {
        [
            self.mean_age.is_failed(),
            self.gender_ratio.is_failed(),
            self.gender_counts.is_failed(),
            self.payment_counts.is_failed(),
            self.age_histogram.is_failed(),
            self.age_density.is_failed(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

/// Runs one report-generation pass over `table`.
///
/// Never fails: optional panels carry their own outcome. The table is only
/// read.
pub fn build_report(table: &DataFrame, options: &ReportOptions) -> TrendReport {
    let span = info_span!("report", rows = table.height(), columns = table.width());
    let _guard = span.enter();

    let fields = FieldMap::resolve(table, options);
    let age = fields.get(KnownField::Age);
    let gender = fields.get(KnownField::Gender);
    let payment = fields.get(KnownField::PaymentMethod);

    let mean_age = Panel::for_column("mean_age", age, |column| column_mean(table, column));
    let gender_counts = Panel::for_column("gender_counts", gender, |column| {
        value_counts(table, column)
    });
    let gender_ratio = match &gender_counts {
        Panel::Ready(counts) if counts.len() >= 2 => {
            Panel::from_result("gender_ratio", leading_pair(counts))
        }
        Panel::Ready(counts) => {
            debug!(
                categories = counts.len(),
                "fewer than two gender categories, skipping ratio"
            );
            Panel::Absent
        }
        Panel::Failed(error) => Panel::Failed(error.clone()),
        Panel::Absent => Panel::Absent,
    };
    let payment_counts = Panel::for_column("payment_counts", payment, |column| {
        value_counts(table, column)
    });

    let age_values = age.map(|column| numeric_values(table, column));
    let age_histogram = match (age, &age_values) {
        (Some(column), Some(values)) => Panel::from_result(
            "age_histogram",
            values
                .as_ref()
                .map_err(Clone::clone)
                .and_then(|values| bin_values(column, values, options.bin_count)),
        ),
        _ => Panel::Absent,
    };
    let age_density = age_density(&age_histogram, age_values.as_ref(), options);

    let report = TrendReport {
        row_count: row_count(table),
        fields,
        mean_age,
        gender_ratio,
        gender_counts,
        payment_counts,
        age_histogram,
        age_density,
        describe: describe_all(table),
    };
    info!(
        rows = report.row_count,
        failed_panels = report.failed_panels(),
        "report pass complete"
    );
    report
}

fn age_density(
    histogram: &Panel<HistogramBins>,
    values: Option<&Result<Vec<f64>>>,
    options: &ReportOptions,
) -> Panel<Vec<DensityPoint>> {
    if !options.density.enabled {
        return Panel::Absent;
    }
    let (Some(histogram), Some(Ok(values))) = (histogram.ready(), values) else {
        return Panel::Absent;
    };
    let Some((lower, upper)) = histogram.range() else {
        return Panel::Absent;
    };
    let Some(kde) = GaussianKde::fit(values) else {
        debug!("density undefined for age values, skipping curve");
        return Panel::Absent;
    };
    Panel::from_result(
        "age_density",
        kde.curve(lower, upper, options.density.grid_size)
            .map(Iterator::collect),
    )
}
