//! Tests for report panel formatting.

use polars::prelude::*;

use shop_cli::present::{
    DESCRIBE_HEADER, NOT_AVAILABLE, bin_label, density_counts, describe_row, format_ratio,
    format_share, format_stat, panel_text, schema_rows,
};
use shop_model::{
    CategoricalSummary, ColumnSummary, DensityPoint, HistogramBin, HistogramBins, NumericSummary,
    ReportOptions, SummaryStatistics,
};
use shop_stats::{FieldMap, Panel, StatsError, build_report};

#[test]
fn headline_metrics() {
    assert_eq!(format_ratio((2, 1)), "2 : 1");
    assert_eq!(format_stat(Some(85.0 / 3.0), 1), "28.3");
    assert_eq!(format_stat(None, 1), "NaN");
    assert_eq!(format_share(200.0 / 3.0), "66.7%");
    assert_eq!(format_share(100.0 / 3.0), "33.3%");
}

#[test]
fn panel_text_variants() {
    let ready = Panel::Ready(3usize);
    let absent: Panel<usize> = Panel::Absent;
    let failed: Panel<usize> = Panel::Failed(StatsError::EmptyTable {
        column: "Age".to_string(),
    });
    assert_eq!(panel_text(&ready, |n| n.to_string()), "3");
    assert_eq!(panel_text(&absent, |n| n.to_string()), NOT_AVAILABLE);
    assert_eq!(
        panel_text(&failed, |n| n.to_string()),
        "error: column 'Age' has no values"
    );
}

#[test]
fn describe_rows_share_one_layout() {
    let numeric = SummaryStatistics {
        column: "Age".to_string(),
        summary: ColumnSummary::Numeric(NumericSummary {
            count: 3,
            mean: Some(85.0 / 3.0),
            std: Some(5.773_502_691_896_258),
            min: Some(25.0),
            p25: Some(25.0),
            p50: Some(25.0),
            p75: Some(30.0),
            max: Some(35.0),
        }),
    };
    let categorical = SummaryStatistics {
        column: "Gender".to_string(),
        summary: ColumnSummary::Categorical(CategoricalSummary {
            count: 3,
            unique: 2,
            top: Some("F".to_string()),
            freq: Some(2),
        }),
    };

    let numeric_row = describe_row(&numeric, 1);
    let categorical_row = describe_row(&categorical, 1);
    assert_eq!(numeric_row.len(), DESCRIBE_HEADER.len());
    assert_eq!(categorical_row.len(), DESCRIBE_HEADER.len());
    insta::assert_json_snapshot!(vec![numeric_row, categorical_row], @r#"
    [
      [
        "Age",
        "3",
        "",
        "",
        "",
        "28.3",
        "5.8",
        "25.0",
        "25.0",
        "25.0",
        "30.0",
        "35.0"
      ],
      [
        "Gender",
        "3",
        "2",
        "F",
        "2",
        "",
        "",
        "",
        "",
        "",
        "",
        ""
      ]
    ]
    "#);
}

#[test]
fn undefined_statistics_render_as_nan() {
    let stats = SummaryStatistics {
        column: "Age".to_string(),
        summary: ColumnSummary::Numeric(NumericSummary::default()),
    };
    let row = describe_row(&stats, 1);
    assert_eq!(row[1], "0");
    assert!(row[5..].iter().all(|cell| cell == "NaN"));
}

#[test]
fn bin_labels_close_last_bin() {
    let bin = HistogramBin {
        lower: 18.0,
        upper: 20.6,
        count: 4,
    };
    assert_eq!(bin_label(&bin, false, 1), "[18.0, 20.6)");
    assert_eq!(bin_label(&bin, true, 1), "[18.0, 20.6]");
}

#[test]
fn density_scaled_to_counts() {
    let histogram = HistogramBins {
        column: "Age".to_string(),
        bins: vec![
            HistogramBin {
                lower: 0.0,
                upper: 2.0,
                count: 6,
            },
            HistogramBin {
                lower: 2.0,
                upper: 4.0,
                count: 4,
            },
        ],
    };
    let curve = [
        DensityPoint { x: 0.0, density: 0.1 },
        DensityPoint { x: 4.0, density: 0.1 },
    ];
    // 0.1 * 10 values * width 2
    let scaled = density_counts(&histogram, &curve);
    assert_eq!(scaled.len(), 2);
    for value in scaled {
        assert!((value.unwrap() - 2.0).abs() < 1e-12);
    }
    assert_eq!(density_counts(&histogram, &[]), vec![None, None]);
}

#[test]
fn schema_lists_resolved_fields() {
    let df = df! {
        "Customer ID" => &[1i64, 2],
        "Age" => &[30i64, 40],
        "Payment Method" => &["Cash", "Venmo"],
    }
    .unwrap();
    let fields = FieldMap::resolve(&df, &ReportOptions::default());
    let rows = schema_rows(&df, &fields);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Customer ID");
    assert_eq!(rows[0][2], "numeric");
    assert_eq!(rows[0][3], "-");
    assert_eq!(rows[1][3], "Age");
    assert_eq!(rows[2][2], "categorical");
    assert_eq!(rows[2][3], "Payment Method");
}

#[test]
fn report_json_marks_panel_status() {
    let df = df! {
        "Age" => &[25i64, 35, 25],
        "Gender" => &["F", "F", "F"],
    }
    .unwrap();
    let report = build_report(&df, &ReportOptions::default().with_density(false));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["row_count"], 3);
    assert_eq!(json["gender_ratio"]["status"], "absent");
    assert_eq!(json["payment_counts"]["status"], "absent");
    assert_eq!(json["mean_age"]["status"], "ready");
    assert_eq!(json["describe"].as_array().map(Vec::len), Some(2));
}
