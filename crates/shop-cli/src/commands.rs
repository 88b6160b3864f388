use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use shop_cli::logging::redact_value;
use shop_cli::present::schema_rows;
use shop_ingest::read_csv_table;
use shop_model::{ColumnSummary, ReportOptions};
use shop_stats::{FieldMap, TrendReport, build_report};

use crate::cli::{OutputFormatArg, ReportArgs, SchemaArgs};
use crate::summary::{print_report, print_schema};

pub fn run_report(args: &ReportArgs) -> Result<TrendReport> {
    let span = info_span!("report_command", path = %args.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(&args.path)
        .with_context(|| format!("load purchase records from {}", args.path.display()))?;
    let options = args.options();
    let report = build_report(&table, &options);
    log_category_tops(&report);

    match args.format {
        OutputFormatArg::Text => print_report(&report, options.precision),
        OutputFormatArg::Json => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report).context("serialize report")?;
            writeln!(stdout).context("write report")?;
        }
    }

    info!(
        rows = report.row_count,
        failed_panels = report.failed_panels(),
        elapsed_ms = whole_millis(start.elapsed()),
        "report finished"
    );
    Ok(report)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let span = info_span!("schema_command", path = %args.path.display());
    let _guard = span.enter();

    let table = read_csv_table(&args.path)
        .with_context(|| format!("load purchase records from {}", args.path.display()))?;
    let fields = FieldMap::resolve(&table, &ReportOptions::default());
    println!("{} rows, {} columns", table.height(), table.width());
    print_schema(&schema_rows(&table, &fields));
    Ok(())
}

fn log_category_tops(report: &TrendReport) {
    for stats in &report.describe {
        if let ColumnSummary::Categorical(summary) = &stats.summary
            && let Some(top) = &summary.top
        {
            trace!(
                column = %stats.column,
                top = redact_value(top),
                freq = summary.freq.unwrap_or(0),
                "most frequent value"
            );
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_millis_saturates() {
        assert_eq!(whole_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(whole_millis(Duration::from_secs(90)), 90_000);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }
}
