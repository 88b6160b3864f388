use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shop_model::{FrequencyCount, HistogramBins, KnownField};
use shop_stats::{Panel, TrendReport};

use shop_cli::present::{
    DESCRIBE_HEADER, NOT_AVAILABLE, bin_label, density_counts, describe_row, format_ratio,
    format_share, format_stat, histogram_bar, panel_text,
};

const BAR_WIDTH: usize = 30;

pub fn print_report(report: &TrendReport, precision: u32) {
    print_metrics(report, precision);
    print_distribution("Gender", &report.gender_counts);
    print_distribution("Payment Method", &report.payment_counts);
    print_histogram(report, precision);
    print_describe(report, precision);
    let missing = report.fields.missing();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().copied().map(KnownField::label).collect();
        eprintln!("Skipped panels for missing columns: {}", labels.join(", "));
    }
}

fn print_metrics(report: &TrendReport, precision: u32) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        label_cell("Total Purchases"),
        Cell::new(report.row_count).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        label_cell("Average Age"),
        panel_cell(&report.mean_age, |mean| format_stat(Some(*mean), precision)),
    ]);
    table.add_row(vec![
        label_cell("Gender Ratio"),
        panel_cell(&report.gender_ratio, |pair| format_ratio(*pair)),
    ]);
    println!("{table}");
}

fn print_distribution(title: &str, panel: &Panel<FrequencyCount>) {
    println!();
    let counts = match panel {
        Panel::Ready(counts) => counts,
        other => {
            println!("{title}: {}", panel_text(other, |_| String::new()));
            return;
        }
    };
    println!("{title} Distribution ({}):", counts.column);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in counts.shares() {
        table.add_row(vec![
            Cell::new(&share.value).fg(Color::Blue),
            Cell::new(share.count),
            Cell::new(format_share(share.percent)),
        ]);
    }
    if counts.is_empty() {
        table.add_row(vec![dim_cell("(no values)"), dim_cell("-"), dim_cell("-")]);
    }
    println!("{table}");
}

fn print_histogram(report: &TrendReport, precision: u32) {
    println!();
    let histogram = match &report.age_histogram {
        Panel::Ready(histogram) => histogram,
        other => {
            println!("Age Distribution: {}", panel_text(other, |_| String::new()));
            return;
        }
    };
    println!("Age Distribution ({}):", histogram.column);
    let density = match &report.age_density {
        Panel::Ready(curve) => density_counts(histogram, curve),
        _ => vec![None; histogram.len()],
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Age"),
        header_cell("Count"),
        header_cell(""),
        header_cell("Density"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let last = histogram.len().saturating_sub(1);
    for (idx, (bin, smoothed)) in histogram.bins.iter().zip(density).enumerate() {
        table.add_row(vec![
            Cell::new(bin_label(bin, idx == last, precision)),
            count_cell(bin.count),
            Cell::new(histogram_bar(bin.count, histogram.max_count(), BAR_WIDTH))
                .fg(Color::Cyan),
            density_cell(smoothed, precision),
        ]);
    }
    println!("{table}");
    if let Panel::Failed(error) = &report.age_density {
        eprintln!("Density curve unavailable: {error}");
    }
    print_range(histogram, precision);
}

fn print_range(histogram: &HistogramBins, precision: u32) {
    if let Some((lower, upper)) = histogram.range() {
        println!(
            "{} bins of width {} spanning {} to {}",
            histogram.len(),
            format_stat(Some(histogram.bin_width()), precision + 1),
            format_stat(Some(lower), precision),
            format_stat(Some(upper), precision)
        );
    }
}

fn print_describe(report: &TrendReport, precision: u32) {
    println!();
    println!("Descriptive Statistics:");
    let mut table = Table::new();
    table.set_header(
        DESCRIBE_HEADER
            .iter()
            .copied()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_describe_table_style(&mut table);
    for idx in 1..DESCRIBE_HEADER.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for stats in &report.describe {
        let mut row = describe_row(stats, precision).into_iter();
        let mut cells = Vec::with_capacity(DESCRIBE_HEADER.len());
        if let Some(column) = row.next() {
            cells.push(
                Cell::new(column)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
            );
        }
        cells.extend(row.map(Cell::new));
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn print_schema(rows: &[[String; 4]]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Kind"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    for [name, dtype, kind, field] in rows {
        let field_cell = if field == "-" {
            dim_cell(field)
        } else {
            Cell::new(field).fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue),
            Cell::new(dtype),
            Cell::new(kind),
            field_cell,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_describe_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn panel_cell<T>(panel: &Panel<T>, render: impl FnOnce(&T) -> String) -> Cell {
    let text = panel_text(panel, render);
    match panel {
        Panel::Ready(_) => Cell::new(text).add_attribute(Attribute::Bold),
        Panel::Absent => dim_cell(text),
        Panel::Failed(_) => Cell::new(text).fg(Color::Red),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn density_cell(value: Option<f64>, precision: u32) -> Cell {
    match value {
        Some(value) => Cell::new(format_stat(Some(value), precision)).fg(Color::Yellow),
        None => dim_cell(NOT_AVAILABLE),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
