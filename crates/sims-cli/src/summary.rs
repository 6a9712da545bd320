//! Terminal tables for validation results, dataset summaries and reductions.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sims_cli::pipeline::ReduceOutcome;
use sims_model::{ValidationResult, ValidationWarning};
use sims_report::{Count, DatasetSummary, DatePoint, ServiceCityCrosstab, service_icon};

pub fn print_validation(result: &ValidationResult) {
    if let Some(message) = result.error_message() {
        eprintln!("Validation failed: {message}");
        return;
    }
    println!(
        "Validation passed: {} records, {} with coordinates",
        result.records.len(),
        result.records.located_count()
    );
    print_warnings(&result.warnings);
}

pub fn print_warnings(warnings: &[ValidationWarning]) {
    if let Some(table) = warnings_table(warnings) {
        println!();
        println!("Warnings:");
        println!("{table}");
    }
}

/// Same table on stderr, for commands that write data to stdout.
pub fn eprint_warnings(warnings: &[ValidationWarning]) {
    if let Some(table) = warnings_table(warnings) {
        eprintln!("Warnings:");
        eprintln!("{table}");
    }
}

fn warnings_table(warnings: &[ValidationWarning]) -> Option<Table> {
    if warnings.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Warning"),
        header_cell("Column"),
        header_cell("Records"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for warning in warnings {
        table.add_row(vec![
            warning_kind_cell(warning),
            warning
                .column()
                .map_or_else(|| dim_cell("-"), Cell::new),
            warning
                .count()
                .map_or_else(|| dim_cell("-"), |count| Cell::new(count).fg(Color::Yellow)),
            Cell::new(warning.to_string()),
        ]);
    }
    Some(table)
}

pub fn print_dataset_summary(summary: &DatasetSummary, crosstab: &ServiceCityCrosstab) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records"), Cell::new(summary.total_records)]);
    table.add_row(vec![Cell::new("Cities"), Cell::new(summary.distinct_cities)]);
    table.add_row(vec![Cell::new("Clients"), Cell::new(summary.distinct_clients)]);
    table.add_row(vec![
        Cell::new("With coordinates"),
        Cell::new(summary.coordinates.located),
    ]);
    table.add_row(vec![
        Cell::new("Without coordinates"),
        count_cell(summary.coordinates.absent, Color::Yellow),
    ]);
    let center = &summary.map_center;
    let center_text = format!("{:.4}, {:.4}", center.latitude, center.longitude);
    table.add_row(vec![
        Cell::new("Map center"),
        if center.from_data {
            Cell::new(center_text)
        } else {
            dim_cell(format!("{center_text} (default)"))
        },
    ]);
    table.add_row(vec![
        Cell::new("Busiest mapped city"),
        optional_cell(summary.busiest_located_city.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("Busiest mapped service"),
        optional_cell(summary.busiest_located_service.as_deref()),
    ]);
    println!("{table}");

    print_service_counts(&summary.services);
    print_counts("Top subservices", "Subservice", &summary.top_subservices);
    print_counts("Top cities", "City", &summary.top_cities);
    print_crosstab(crosstab);
}

fn print_service_counts(counts: &[Count]) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Service"),
        header_cell("Icon"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![
            Cell::new(&count.label),
            dim_cell(service_icon(&count.label)),
            Cell::new(count.count),
        ]);
    }
    println!();
    println!("Services:");
    println!("{table}");
}

fn print_counts(title: &str, label: &str, counts: &[Count]) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![Cell::new(&count.label), Cell::new(count.count)]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_crosstab(crosstab: &ServiceCityCrosstab) {
    let Some(table) = crosstab_table(crosstab) else {
        return;
    };
    println!();
    println!("Services by city:");
    println!("{table}");
}

/// Cities down the side, one column per service. `None` when there are no cities.
fn crosstab_table(crosstab: &ServiceCityCrosstab) -> Option<Table> {
    if crosstab.cities.is_empty() {
        return None;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("City")];
    header.extend(crosstab.services.iter().map(header_cell));
    table.set_header(header);
    apply_wide_table_style(&mut table);
    for column in 1..=crosstab.services.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (city, counts) in crosstab.cities.iter().zip(&crosstab.counts) {
        let mut row = vec![Cell::new(city)];
        row.extend(counts.iter().map(|count| {
            if *count == 0 {
                dim_cell(count)
            } else {
                Cell::new(count)
            }
        }));
        table.add_row(row);
    }
    Some(table)
}

pub fn print_date_trend(points: &[DatePoint]) {
    if points.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Date"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(point.date.format("%Y-%m-%d")),
            Cell::new(point.count),
        ]);
    }
    println!();
    println!("Records per date:");
    println!("{table}");
}

/// Written to stderr so the CSV can go to stdout.
pub fn print_reduction(outcome: &ReduceOutcome) {
    let reduction = &outcome.reduction;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Validated"), Cell::new(outcome.validated_count)]);
    table.add_row(vec![Cell::new("After filters"), Cell::new(outcome.queried_count)]);
    table.add_row(vec![
        Cell::new(format!(
            "Kept ({}, max {})",
            outcome.settings.sampling_method, outcome.settings.max_markers
        )),
        Cell::new(reduction.records.len()).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
    if reduction.sampled {
        eprintln!(
            "Showing {} of {} records.",
            reduction.records.len(),
            reduction.original_count
        );
    }
}

fn warning_kind_cell(warning: &ValidationWarning) -> Cell {
    let label = match warning {
        ValidationWarning::NoData => "NO DATA",
        ValidationWarning::ColumnRenamed { .. } => "RENAMED",
        ValidationWarning::MissingCoordinates { .. } => "NO COORDS",
        ValidationWarning::UnparseableCoordinates { .. } => "BAD COORDS",
        ValidationWarning::CoordinatesOutOfRange { .. } => "OUT OF RANGE",
        ValidationWarning::OptionalColumnMissing { .. } => "OPTIONAL",
        ValidationWarning::InvalidOptionalValues { .. } => "BAD VALUES",
    };
    if warning.is_coordinate_issue() {
        Cell::new(label).fg(Color::Yellow)
    } else {
        dim_cell(label)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
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

fn header_cell<T: ToString>(label: T) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
