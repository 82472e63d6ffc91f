use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use solar_core::{FileOutcome, MergeReport, SplitReport};

use crate::types::{CleanResult, GeocodeResult, MenuOutcome};

pub fn print_split_summary(report: &SplitReport) {
    if report.chunks.is_empty() {
        println!("No features in input, nothing written.");
        return;
    }
    println!(
        "Split {} features into {} files of up to {}",
        report.total_features,
        report.chunks.len(),
        report.chunk_size
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Features"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for chunk in &report.chunks {
        let name = chunk
            .path
            .file_name()
            .map_or_else(|| chunk.path.display().to_string(), |n| n.to_string_lossy().into_owned());
        table.add_row(vec![
            Cell::new(name),
            dim_cell(format!("{} to {}", chunk.range.start + 1, chunk.range.end)),
            Cell::new(chunk.range.len()),
        ]);
    }
    println!("{table}");
    println!("Output: {}", report.output_dir.display());
}

pub fn print_merge_summary(report: &MergeReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Features"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in &report.files {
        let (status, features) = match &file.outcome {
            FileOutcome::Merged { features } => (Cell::new("merged").fg(Color::Green), Some(*features)),
            FileOutcome::NotFeatureCollection { reason } | FileOutcome::Failed { reason } => {
                (Cell::new(format!("skipped: {reason}")).fg(Color::Yellow), None)
            }
        };
        table.add_row(vec![
            Cell::new(file.path.display()),
            status,
            features.map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        merge_status_cell(report.merged_count(), report.skipped_count()),
        Cell::new(report.total_features).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if let Some(source) = &report.metadata_source {
        println!("Metadata from: {}", source.display());
    }
    println!("Output: {}", report.output.display());
}

pub fn print_geocode_summary(result: &GeocodeResult) {
    let stats = &result.stats;
    println!("Input: {}", result.input.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Features")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Address found"), Cell::new(stats.success)]);
    table.add_row(vec![
        Cell::new("No address"),
        count_cell(stats.no_address, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid coordinates"),
        count_cell(stats.invalid_coordinates, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Geocoding errors"),
        count_cell(stats.geocode_errors, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Output: {} ({:.1}s)",
        result.output.display(),
        result.elapsed.as_secs_f64()
    );
}

pub fn print_clean_summary(result: &CleanResult) {
    let report = &result.report;
    for change in &report.samples {
        println!("  {} -> {}", change.original, change.cleaned);
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Addresses")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (rule, count) in &report.by_rule {
        table.add_row(vec![
            Cell::new(rule.description()),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Modified")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.modified, Color::Green).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Output: {}", result.output.display());
}

pub fn print_menu_summary(outcome: &MenuOutcome) {
    match outcome {
        MenuOutcome::Split(report) => print_split_summary(report),
        MenuOutcome::Merge(report) => print_merge_summary(report),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// `"N merged, M skipped"`, highlighted when anything was skipped.
fn merge_status_cell(merged: usize, skipped: usize) -> Cell {
    let cell = Cell::new(merge_status_label(merged, skipped)).add_attribute(Attribute::Bold);
    if skipped > 0 {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

fn merge_status_label(merged: usize, skipped: usize) -> String {
    format!("{merged} merged, {skipped} skipped")
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
