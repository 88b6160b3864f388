//! End-to-end report passes over small purchase tables.

use polars::prelude::*;

use shop_model::{ColumnKind, KnownField, ReportOptions};
use shop_stats::{Panel, StatsError, build_report, column_kind, has_column};

fn scenario() -> DataFrame {
    df! {
        "Customer ID" => &[1i64, 2, 3],
        "age" => &[25i64, 35, 25],
        "gender" => &["F", "M", "F"],
        "paymentMethod" => &["Card", "Cash", "Card"],
    }
    .unwrap()
}

#[test]
fn scenario_report() {
    let df = scenario();
    let report = build_report(&df, &ReportOptions::default());

    assert_eq!(report.row_count, 3);
    let mean = *report.mean_age.ready().expect("mean age");
    assert_eq!(shop_common::round_to(mean, 1), 28.3);

    insta::assert_json_snapshot!(report.fields, @r#"
    {
      "age": "age",
      "gender": "gender",
      "paymentMethod": "paymentMethod"
    }
    "#);
    insta::assert_json_snapshot!(report.gender_ratio, @r#"
    {
      "status": "ready",
      "value": [
        2,
        1
      ]
    }
    "#);

    let payment = report.payment_counts.ready().expect("payment counts");
    let shares: Vec<(String, f64)> = payment
        .shares()
        .into_iter()
        .map(|share| (share.value, shop_common::round_to(share.percent, 1)))
        .collect();
    assert_eq!(
        shares,
        vec![("Card".to_string(), 66.7), ("Cash".to_string(), 33.3)]
    );
}

#[test]
fn describe_lists_every_column() {
    let df = scenario();
    let report = build_report(&df, &ReportOptions::default());
    let kinds: Vec<(&str, ColumnKind)> = report
        .describe
        .iter()
        .map(|stats| (stats.column.as_str(), stats.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Customer ID", ColumnKind::Numeric),
            ("age", ColumnKind::Numeric),
            ("gender", ColumnKind::Categorical),
            ("paymentMethod", ColumnKind::Categorical),
        ]
    );
}

#[test]
fn histogram_and_density_share_range() {
    let ages: Vec<i64> = (0..200).map(|i| 18 + (i * 7) % 53).collect();
    let df = df! { "Age" => &ages }.unwrap();
    let report = build_report(&df, &ReportOptions::default());

    let histogram = report.age_histogram.ready().expect("histogram");
    assert_eq!(histogram.len(), 20);
    assert_eq!(histogram.total(), 200);
    let (lower, upper) = histogram.range().expect("range");

    let density = report.age_density.ready().expect("density");
    assert_eq!(density.len(), 200);
    assert_eq!(density.first().map(|p| p.x), Some(lower));
    assert_eq!(density.last().map(|p| p.x), Some(upper));
}

#[test]
fn column_override_selects_panel_source() {
    let df = df! {
        "Age" => &[30i64, 40],
        "Years" => &[20i64, 20],
    }
    .unwrap();
    let options = ReportOptions::default().with_column(KnownField::Age, "Years");
    let report = build_report(&df, &options);
    assert_eq!(report.fields.age.as_deref(), Some("Years"));
    assert_eq!(report.mean_age, Panel::Ready(20.0));
    // Zero spread leaves the density undefined
    assert!(report.age_density.is_absent());
}

#[test]
fn absent_columns_are_not_errors() {
    let df = df! { "Season" => &["Winter", "Summer"] }.unwrap();
    assert!(!has_column(&df, "Age"));
    assert_eq!(column_kind(&df, "Season"), Some(ColumnKind::Categorical));

    let report = build_report(&df, &ReportOptions::default());
    assert_eq!(report.failed_panels(), 0);
    assert_eq!(
        report.fields.missing(),
        vec![KnownField::Age, KnownField::Gender, KnownField::PaymentMethod]
    );
}

#[test]
fn non_numeric_age_fails_only_its_panels() {
    let df = df! {
        "Age" => &["n/a", "n/a"],
        "Payment Method" => &["Cash", "Venmo"],
    }
    .unwrap();
    let report = build_report(&df, &ReportOptions::default());
    assert!(matches!(
        report.mean_age,
        Panel::Failed(StatsError::InvalidColumnKind { .. })
    ));
    assert!(report.payment_counts.is_ready());
    assert_eq!(report.describe.len(), 2);
}
