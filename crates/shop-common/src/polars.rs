//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! plus the number formatting used when summaries are shown to a reader.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to the label used for a categorical value.
///
/// Returns an empty string for `Null`. Floats are printed without
/// unnecessary trailing zeros and booleans as `true`/`false`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use shop_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("Card")), "Card");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            // Display wraps some string-like values in quotes
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use shop_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Rounds `value` to `places` decimal places, half away from zero.
///
/// ```
/// use shop_common::round_to;
///
/// assert_eq!(round_to(28.333_333, 1), 28.3);
/// assert_eq!(round_to(2.25, 1), 2.3);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places.min(15) as i32);
    (value * factor).round() / factor
}

/// Formats `value` with exactly `places` decimals after rounding.
///
/// ```
/// use shop_common::format_fixed;
///
/// assert_eq!(format_fixed(28.333_333, 1), "28.3");
/// assert_eq!(format_fixed(66.666_666, 1), "66.7");
/// assert_eq!(format_fixed(3.0, 2), "3.00");
/// ```
pub fn format_fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_to(value, places))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(40.0)), "40");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-0.0), "-0");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(28.333_333_333, 1), 28.3);
        assert_eq!(round_to(28.35, 0), 28.0);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert!(round_to(f64::NAN, 1).is_nan());
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(28.333_333, 1), "28.3");
        assert_eq!(format_fixed(50.0, 1), "50.0");
        assert_eq!(format_fixed(7.0, 0), "7");
    }
}
