//! Data model for the shopping trends summaries.
//!
//! Every type here is plain data: computed by `shop-stats` on each report
//! pass and handed to a renderer. Nothing is cached or persisted.

pub mod field;
pub mod frequency;
pub mod histogram;
pub mod options;
pub mod summary;

pub use field::{ColumnKind, KnownField};
pub use frequency::{CategoryShare, FrequencyCount};
pub use histogram::{DensityPoint, HistogramBin, HistogramBins};
pub use options::{DEFAULT_BIN_COUNT, DEFAULT_DENSITY_GRID, DensityOptions, ReportOptions};
pub use summary::{CategoricalSummary, ColumnSummary, NumericSummary, SummaryStatistics};
