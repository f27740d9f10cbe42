//! Post-run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dlwiki_transform::CATEGORIES;

use crate::pipeline::ExportOutcome;

pub fn print_summary(outcome: &ExportOutcome) {
    println!("Output: {}", outcome.output_dir.display());
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Template"),
        header_cell("Records"),
        header_cell("Status"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in &outcome.categories {
        let status = match &category.error {
            None => Cell::new("ok").fg(Color::Green),
            Some(cause) => Cell::new(format!("failed: {cause}")).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(category.name),
            Cell::new(category.template),
            Cell::new(category.records),
            status,
        ]);
    }
    println!("{table}");
    let failed = outcome.categories.iter().filter(|c| c.error.is_some()).count();
    if failed > 0 {
        println!("{failed} of {} categories failed", outcome.categories.len());
    }
}

/// The `categories` subcommand listing.
pub fn print_categories() {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Template"),
        header_cell("Layout"),
        header_cell("Sources"),
    ]);
    for spec in CATEGORIES {
        let sources: Vec<&str> = spec.passes.iter().map(|(table, _)| *table).collect();
        table.add_row(vec![
            Cell::new(spec.name),
            Cell::new(spec.template),
            Cell::new(spec.layout.as_str()),
            Cell::new(sources.join(", ")),
        ]);
    }
    println!("{table}");
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
