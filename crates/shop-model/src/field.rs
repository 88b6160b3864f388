//! Known optional fields of a purchase record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A purchase-record field the report knows how to summarize.
///
/// Every known field is optional: a loaded table may lack any of them, in
/// which case the panels built from it are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KnownField {
    /// Customer age in years (numeric).
    Age,
    /// Customer gender (categorical).
    Gender,
    /// Payment method used for the purchase (categorical).
    PaymentMethod,
}

impl KnownField {
    /// All known fields in report order.
    pub const ALL: [KnownField; 3] = [Self::Age, Self::Gender, Self::PaymentMethod];

    /// Canonical record attribute name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::PaymentMethod => "paymentMethod",
        }
    }

    /// Human-readable label used in panel titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::PaymentMethod => "Payment Method",
        }
    }

    /// Header spellings recognised for this field.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Age => &["Age", "age", "customer_age"],
            Self::Gender => &["Gender", "gender", "sex"],
            Self::PaymentMethod => &["Payment Method", "paymentMethod", "payment_method"],
        }
    }

    /// The column kind the field's panels require.
    pub fn expected_kind(self) -> ColumnKind {
        match self {
            Self::Age => ColumnKind::Numeric,
            Self::Gender | Self::PaymentMethod => ColumnKind::Categorical,
        }
    }

    /// Returns true if `header` is a recognised spelling of this field.
    ///
    /// Comparison ignores ASCII case, whitespace, `_` and `-`, so
    /// `Payment Method`, `payment_method` and `PAYMENTMETHOD` all match.
    pub fn matches_header(self, header: &str) -> bool {
        let key = header_key(header);
        !key.is_empty() && self.aliases().iter().any(|alias| header_key(alias) == key)
    }
}

impl fmt::Display for KnownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Normalized comparison key for a column header.
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// How a column is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating-point column.
    Numeric,
    /// Anything else: text, booleans, dates, mixed values.
    Categorical,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_header_ignores_case_and_separators() {
        assert!(KnownField::PaymentMethod.matches_header("Payment Method"));
        assert!(KnownField::PaymentMethod.matches_header("payment_method"));
        assert!(KnownField::PaymentMethod.matches_header("PAYMENTMETHOD"));
        assert!(KnownField::Age.matches_header(" AGE "));
        assert!(!KnownField::Age.matches_header("Average"));
        assert!(!KnownField::Gender.matches_header(""));
    }

    #[test]
    fn expected_kinds() {
        assert_eq!(KnownField::Age.expected_kind(), ColumnKind::Numeric);
        assert_eq!(KnownField::Gender.expected_kind(), ColumnKind::Categorical);
    }
}
