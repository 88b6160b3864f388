//! Shared utilities for the shopping trends crates.
//!
//! This crate provides common helpers used across the workspace, including
//! Polars `AnyValue` conversions and display formatting for numbers.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_string, format_fixed, format_numeric, round_to};
