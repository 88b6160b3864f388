//! Descriptive statistics over purchase tables.
//!
//! Every operation takes a read-only Polars [`DataFrame`] and returns a
//! plain data structure from `shop-model`:
//!
//! - **Aggregates**: row count, column mean, value counts, gender ratio
//! - **Describe**: per-column summary statistics, numeric or categorical
//! - **Histogram**: equal-width bins over a numeric column
//! - **Density**: Gaussian KDE sampled over the histogram range
//! - **Guard**: column presence checks and known-field resolution
//!
//! [`build_report`] runs all of them in one pass. Optional panels whose
//! column is absent are skipped; a failing panel never aborts the others.
//!
//! # Example
//!
//! ```ignore
//! use shop_model::ReportOptions;
//! use shop_stats::build_report;
//!
//! let report = build_report(&df, &ReportOptions::default());
//! if let Some(mean) = report.mean_age.ready() {
//!     println!("Average age: {mean:.1}");
//! }
//! ```
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod aggregate;
mod density;
mod describe;
mod error;
mod guard;
mod histogram;
mod numeric;
mod report;

// === Error Types ===
pub use error::{Result, StatsError};

// === Aggregates ===
pub use aggregate::{column_mean, gender_ratio, leading_pair, row_count, value_counts};
pub use describe::{categorical_summary, describe_all, describe_column, numeric_summary};
pub use histogram::{bin_values, histogram};

// === Density ===
pub use density::{DensityCurve, GaussianKde};

// === Column Guard ===
pub use guard::{FieldMap, column_kind, has_column, kind_mismatch, kind_of_dtype, resolve_field};

// === Value Extraction ===
pub use numeric::{category_values, mean, min_max, numeric_values, quantile_sorted, sample_std};

// === Report Pass ===
pub use report::{Panel, TrendReport, build_report};
