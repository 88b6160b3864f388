//! Purchase-record ingestion.
//!
//! Loads a persisted purchase dataset from CSV into a Polars [`DataFrame`],
//! which the summary crates treat as an immutable table. Column names are
//! trimmed; everything else about the schema is discovered from the file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use shop_ingest::read_csv_table;
//!
//! let df = read_csv_table(Path::new("data/shopping_trends.csv"))?;
//! println!("{} rows, {} columns", df.height(), df.width());
//! ```
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_schema,
    read_csv_table, read_csv_table_with_limit, validate_encoding,
};
