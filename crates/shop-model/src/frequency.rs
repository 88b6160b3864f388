//! Per-value occurrence tallies over a categorical column.

use serde::{Deserialize, Serialize};

/// Occurrence counts of each distinct value in a column.
///
/// Entries are ordered by descending count; equal counts keep the order in
/// which the values first appeared in the source column. Missing values are
/// not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCount {
    /// Source column name.
    pub column: String,
    /// `(value, count)` pairs, most frequent first.
    pub entries: Vec<(String, usize)>,
}

/// A value's count together with its share of the column total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub value: String,
    pub count: usize,
    /// Percentage of the counted total, `0.0..=100.0`.
    pub percent: f64,
}

impl FrequencyCount {
    /// Builds a frequency count from values in source order.
    ///
    /// `None` marks a missing value and is skipped.
    pub fn from_values<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut positions: std::collections::HashMap<String, usize> =
            std::collections::HashMap::new();
        for value in values.into_iter().flatten() {
            let value = value.as_ref();
            match positions.get(value) {
                Some(&idx) => entries[idx].1 += 1,
                None => {
                    positions.insert(value.to_string(), entries.len());
                    entries.push((value.to_string(), 1));
                }
            }
        }
        // Stable sort keeps first-seen order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self {
            column: column.into(),
            entries,
        }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no value was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Count for `value`, if present.
    pub fn get(&self, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == value)
            .map(|(_, count)| *count)
    }

    /// The most frequent value and its count.
    pub fn top(&self) -> Option<(&str, usize)> {
        self.entries
            .first()
            .map(|(value, count)| (value.as_str(), *count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Each value's share of the total, in entry order.
    pub fn shares(&self) -> Vec<CategoryShare> {
        let total = self.total();
        self.entries
            .iter()
            .map(|(value, count)| CategoryShare {
                value: value.clone(),
                count: *count,
                percent: if total == 0 {
                    0.0
                } else {
                    *count as f64 * 100.0 / total as f64
                },
            })
            .collect()
    }
}
