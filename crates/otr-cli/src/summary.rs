//! Console tables for indexes and comparison results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use otr_core::{LocationSet, VariantIndex};
use otr_model::{ComparisonResult, PercentageDifference};
use otr_report::{format_percentage, format_rupiah};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn models_table(index: &VariantIndex) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Model Series"), header_cell("Variants")]);
    apply_table_style(&mut table);
    for entry in index.iter() {
        table.add_row(vec![
            Cell::new(&entry.model_series),
            Cell::new(entry.variants.len()),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn variants_table(model_series: &str, variants: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&format!("Variants of {model_series}"))]);
    apply_table_style(&mut table);
    for variant in variants {
        table.add_row(vec![Cell::new(variant)]);
    }
    table
}

pub fn locations_table(locations: &LocationSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Location")]);
    apply_table_style(&mut table);
    for location in locations.iter() {
        table.add_row(vec![Cell::new(location)]);
    }
    table
}

/// Two-column label/value table for one comparison.
pub fn comparison_table(result: &ComparisonResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    let difference_color = if result.signed_difference() > 0.0 {
        Color::Red
    } else if result.signed_difference() < 0.0 {
        Color::Green
    } else {
        Color::Reset
    };
    let percentage_cell = match result.percentage_difference {
        PercentageDifference::Value(_) => {
            Cell::new(format_percentage(result.percentage_difference)).fg(difference_color)
        }
        PercentageDifference::Undefined => {
            Cell::new(format_percentage(result.percentage_difference)).fg(Color::DarkGrey)
        }
    };

    table.add_row(vec![label_cell("Model Series"), Cell::new(&result.model_series)]);
    table.add_row(vec![label_cell("Variant"), Cell::new(&result.variant)]);
    table.add_row(vec![label_cell("Location 1"), Cell::new(&result.location_a)]);
    table.add_row(vec![
        label_cell(&format!("Price {}", result.location_a)),
        Cell::new(format_rupiah(result.price_a)),
    ]);
    table.add_row(vec![label_cell("Location 2"), Cell::new(&result.location_b)]);
    table.add_row(vec![
        label_cell(&format!("Price {}", result.location_b)),
        Cell::new(format_rupiah(result.price_b)),
    ]);
    table.add_row(vec![
        label_cell("Absolute Difference"),
        Cell::new(format_rupiah(result.absolute_difference)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Percentage Difference"), percentage_cell]);
    table
}
