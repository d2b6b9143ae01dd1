use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audit_cli::types::AuditSummary;

pub fn print_summary(summary: &AuditSummary) {
    println!("Catalog: {}", summary.catalog.display());
    println!("Data: {}", summary.data_dir.display());
    println!("Output: {}", summary.output_dir.display());
    println!("Threshold: {:.2}", summary.threshold);

    let stats = &summary.statistics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Critical features"), Cell::new(stats.critical_features)]);
    table.add_row(vec![Cell::new("Mapped features"), Cell::new(stats.mapped_features)]);
    table.add_row(vec![Cell::new("Data columns"), Cell::new(stats.data_columns)]);
    table.add_row(vec![Cell::new("Present features"), Cell::new(stats.present_features)]);
    table.add_row(vec![
        Cell::new("Missing features"),
        count_cell(stats.missing_features, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Meeting threshold"),
        Cell::new(stats.features_meeting_threshold),
    ]);
    table.add_row(vec![Cell::new("Scanned files"), Cell::new(stats.scanned_files)]);
    table.add_row(vec![
        Cell::new("Skipped files"),
        count_cell(stats.skipped_files, Color::Yellow),
    ]);
    println!("{table}");

    print_missing_table(summary);
    print_skipped_table(summary);
}

pub fn print_json(summary: &AuditSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize summary")?;
    println!("{json}");
    Ok(())
}

fn print_missing_table(summary: &AuditSummary) {
    if summary.missing_features.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Missing feature")]);
    apply_table_style(&mut table);
    for feature in &summary.missing_features {
        table.add_row(vec![Cell::new(feature).fg(Color::Red)]);
    }
    println!();
    println!("Missing critical features:");
    println!("{table}");
}

fn print_skipped_table(summary: &AuditSummary) {
    if summary.skipped_files.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for skipped in &summary.skipped_files {
        table.add_row(vec![
            Cell::new(&skipped.file).fg(Color::Yellow),
            Cell::new(&skipped.reason),
        ]);
    }
    println!();
    println!("Skipped files:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
