//! Tests for shop-model types.

use shop_model::{
    CategoricalSummary, ColumnKind, ColumnSummary, FrequencyCount, KnownField, NumericSummary,
    ReportOptions, SummaryStatistics,
};

#[test]
fn categorical_summary_serializes_with_kind_tag() {
    let stats = SummaryStatistics {
        column: "Gender".to_string(),
        summary: ColumnSummary::Categorical(CategoricalSummary {
            count: 3,
            unique: 2,
            top: Some("F".to_string()),
            freq: Some(2),
        }),
    };
    insta::assert_json_snapshot!(stats, @r#"
    {
      "column": "Gender",
      "summary": {
        "kind": "categorical",
        "count": 3,
        "unique": 2,
        "top": "F",
        "freq": 2
      }
    }
    "#);
}

#[test]
fn frequency_count_serializes_as_pairs() {
    let counts = FrequencyCount::from_values("Gender", [Some("F"), Some("M"), Some("F")]);
    insta::assert_json_snapshot!(counts, @r#"
    {
      "column": "Gender",
      "entries": [
        [
          "F",
          2
        ],
        [
          "M",
          1
        ]
      ]
    }
    "#);
}

#[test]
fn undefined_numeric_summary() {
    let stats = SummaryStatistics {
        column: "Age".to_string(),
        summary: ColumnSummary::Numeric(NumericSummary::default()),
    };
    assert_eq!(stats.kind(), ColumnKind::Numeric);
    assert_eq!(stats.count(), 0);
    assert!(stats.as_numeric().unwrap().is_undefined());
    assert!(stats.as_categorical().is_none());
}

#[test]
fn report_options_round_trip() {
    let options = ReportOptions::new()
        .with_bin_count(10)
        .with_density(false)
        .with_column(KnownField::PaymentMethod, "pay");
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: ReportOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
    assert_eq!(round.column_override(KnownField::PaymentMethod), Some("pay"));
    assert_eq!(round.column_override(KnownField::Age), None);
}

#[test]
fn report_options_defaults() {
    let options = ReportOptions::default();
    assert_eq!(options.bin_count, 20);
    assert!(options.density.enabled);
    assert_eq!(options.density.grid_size, 200);
    assert_eq!(options.precision, 1);
}
