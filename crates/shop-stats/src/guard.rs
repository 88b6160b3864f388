//! Column presence checks and known-field resolution.
//!
//! A loaded table may lack any of the known purchase fields. Every panel
//! built from an optional field goes through [`FieldMap`], which records
//! once per pass which column (if any) backs each [`KnownField`].

use polars::prelude::{DataFrame, DataType};
use serde::Serialize;
use tracing::{debug, warn};

use shop_model::{ColumnKind, KnownField, ReportOptions};

/// Returns true if `table` has a column named exactly `name`.
pub fn has_column(table: &DataFrame, name: &str) -> bool {
    table
        .get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
}

/// Summary kind for a Polars data type.
///
/// Integer and float columns are numeric; everything else, including
/// booleans and strings holding numbers, is categorical.
pub fn kind_of_dtype(dtype: &DataType) -> ColumnKind {
    if dtype.is_integer() || dtype.is_float() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// Summary kind of the column `name`, or `None` if it does not exist.
pub fn column_kind(table: &DataFrame, name: &str) -> Option<ColumnKind> {
    table
        .column(name)
        .ok()
        .map(|column| kind_of_dtype(column.dtype()))
}

/// Finds the column backing `field`.
///
/// An explicit override is used as given; if it names no column the field
/// is absent. Otherwise an exact alias match is preferred over a
/// case/separator-insensitive one.
pub fn resolve_field(
    table: &DataFrame,
    field: KnownField,
    column_override: Option<&str>,
) -> Option<String> {
    if let Some(name) = column_override {
        return has_column(table, name).then(|| name.to_string());
    }
    let names = table.get_column_names();
    if let Some(exact) = names
        .iter()
        .find(|name| field.aliases().contains(&name.as_str()))
    {
        return Some(exact.to_string());
    }
    names
        .iter()
        .find(|name| field.matches_header(name.as_str()))
        .map(|name| name.to_string())
}

/// Kind of `column` when it differs from what `field`'s panels expect.
///
/// Columns without any values never mismatch, since a header-only CSV loads
/// every column as text.
pub fn kind_mismatch(table: &DataFrame, field: KnownField, column: &str) -> Option<ColumnKind> {
    let values = table.column(column).ok()?;
    if values.null_count() == values.len() {
        return None;
    }
    let actual = kind_of_dtype(values.dtype());
    (actual != field.expected_kind()).then_some(actual)
}

/// Which column, if any, backs each known field for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMap {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub payment_method: Option<String>,
}

impl FieldMap {
    /// Resolves every known field against `table`.
    pub fn resolve(table: &DataFrame, options: &ReportOptions) -> Self {
        let mut map = Self::default();
        for field in KnownField::ALL {
            let column = resolve_field(table, field, options.column_override(field));
            match &column {
                Some(name) => {
                    debug!(field = %field, column = %name, "resolved field");
                    if let Some(actual) = kind_mismatch(table, field, name) {
                        warn!(
                            field = %field,
                            column = %name,
                            expected = %field.expected_kind(),
                            actual = %actual,
                            "column kind does not match field"
                        );
                    }
                }
                None => debug!(field = %field, "field not present"),
            }
            *map.slot_mut(field) = column;
        }
        map
    }

    /// Column backing `field`, if present.
    pub fn get(&self, field: KnownField) -> Option<&str> {
        match field {
            KnownField::Age => self.age.as_deref(),
            KnownField::Gender => self.gender.as_deref(),
            KnownField::PaymentMethod => self.payment_method.as_deref(),
        }
    }

    pub fn is_present(&self, field: KnownField) -> bool {
        self.get(field).is_some()
    }

    /// Known fields absent from the table.
    pub fn missing(&self) -> Vec<KnownField> {
        KnownField::ALL
            .into_iter()
            .filter(|field| !self.is_present(*field))
            .collect()
    }

    /// The known field a column backs, if any.
    pub fn field_for(&self, column: &str) -> Option<KnownField> {
        KnownField::ALL
            .into_iter()
            .find(|field| self.get(*field) == Some(column))
    }

    fn slot_mut(&mut self, field: KnownField) -> &mut Option<String> {
        match field {
            KnownField::Age => &mut self.age,
            KnownField::Gender => &mut self.gender,
            KnownField::PaymentMethod => &mut self.payment_method,
        }
    }
}
