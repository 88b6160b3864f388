//! Error types for summary computations.

use thiserror::Error;

use shop_model::ColumnKind;

/// Errors produced by aggregation and binning operations.
///
/// Every operation is deterministic: calling it again on the same table
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Column is missing or is not of the kind the operation needs.
    #[error("column '{column}' is not a {expected} column")]
    InvalidColumnKind {
        column: String,
        expected: ColumnKind,
    },

    /// Operation is undefined without values.
    #[error("column '{column}' has no values")]
    EmptyTable { column: String },

    /// Fewer distinct values than the operation requires.
    #[error("column '{column}' has {actual} distinct values, need at least {required}")]
    InsufficientCategories {
        column: String,
        required: usize,
        actual: usize,
    },

    /// A caller-supplied parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for StatsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for summary computations.
pub type Result<T> = std::result::Result<T, StatsError>;
