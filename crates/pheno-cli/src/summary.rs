use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pheno_cli::types::{ExportResult, OutputSummary, ReshapeResult};

pub fn print_summary(result: &ReshapeResult) {
    let (rows, columns) = result.input_shape;
    println!("Manifest: {}", result.manifest.display());
    println!("Input: {rows} rows x {columns} columns");
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Records"),
        header_cell("Columns"),
        header_cell("Path"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in &result.outputs {
        table.add_row(output_row(output));
    }
    println!("{table}");
}

pub fn print_export(result: &ExportResult) {
    println!(
        "Wrote {} records to {}",
        result.records,
        result.path.display()
    );
}

pub fn print_populations(populations: &[(String, Vec<String>)]) {
    let mut table = Table::new();
    table.set_header(vec!["Population", "Count columns"]);
    apply_table_style(&mut table);
    for (population, columns) in populations {
        table.add_row(vec![population.clone(), columns.join(", ")]);
    }
    println!("{table}");
}

fn output_row(output: &OutputSummary) -> Vec<Cell> {
    vec![
        Cell::new(output.name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        count_cell(output.records),
        Cell::new(output.columns),
        path_cell(output.path.as_deref()),
    ]
}

fn path_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn apply_table_style(table: &mut Table) {
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
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
