use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use layout_persistence::LayoutShape;

use layout_cli::types::{ConfigReport, InfoReport, MigrateReport, StatsReport};

pub fn print_info(report: &InfoReport) {
    println!("File: {}", report.path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![Cell::new("Shape"), Cell::new(shape_label(report.shape))]);
    match &report.envelope {
        Some(envelope) => {
            let version_cell = if envelope.is_current() {
                Cell::new(envelope.file_version)
            } else {
                Cell::new(envelope.file_version)
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold)
            };
            table.add_row(vec![Cell::new("File version"), version_cell]);
            table.add_row(vec![
                Cell::new("Layout version"),
                Cell::new(&envelope.layout_version),
            ]);
            table.add_row(vec![
                Cell::new("Modified"),
                Cell::new(envelope.modified.to_rfc3339()),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("File version"), Cell::new("1 (legacy)")]);
            table.add_row(vec![Cell::new("Layout version"), dim_cell("-")]);
            table.add_row(vec![Cell::new("Modified"), dim_cell("-")]);
        }
    }
    let objects_cell = match report.objects {
        Some(count) => Cell::new(count),
        None => Cell::new("unreadable").fg(Color::Red),
    };
    table.add_row(vec![Cell::new("Objects"), objects_cell]);
    println!("{table}");
}

pub fn print_stats(report: &StatsReport) {
    let stats = &report.statistics;
    println!("File: {}", report.path.display());
    if report.counted == 0 {
        println!("No objects to measure.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Bounds"),
        Cell::new(format!(
            "({}, {}) - ({}, {})",
            stats.min_x, stats.min_y, stats.max_x, stats.max_y
        )),
    ]);
    table.add_row(vec![
        Cell::new("Used area"),
        Cell::new(format!("{} x {}", stats.used_area_width, stats.used_area_height)),
    ]);
    table.add_row(vec![Cell::new("Used tiles"), Cell::new(stats.used_tiles)]);
    table.add_row(vec![Cell::new("Minimum tiles"), Cell::new(stats.min_tiles)]);
    table.add_row(vec![
        Cell::new("Efficiency")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", stats.efficiency)).add_attribute(Attribute::Bold),
    ]);
    if report.include_roads {
        table.add_row(vec![dim_cell("Roads"), dim_cell("included")]);
    }
    println!("{table}");

    if report.buildings.is_empty() {
        return;
    }
    let mut buildings = Table::new();
    buildings.set_header(vec![
        header_cell("Building"),
        header_cell("Identifier"),
        header_cell("Count"),
    ]);
    apply_building_table_style(&mut buildings);
    align_column(&mut buildings, 2, CellAlignment::Right);
    let mut total = 0usize;
    for building in &report.buildings {
        total += building.count;
        buildings.add_row(vec![
            Cell::new(&building.name),
            dim_cell(&building.identifier),
            Cell::new(building.count),
        ]);
    }
    buildings.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{buildings}");
}

pub fn print_migrate(report: &MigrateReport) {
    if report.from_version == report.to_version && report.source == report.output {
        println!(
            "{} is already at file version {}; rewrote {} objects.",
            report.source.display(),
            report.to_version,
            report.objects
        );
    } else {
        println!(
            "Migrated {} objects from file version {} to {}: {}",
            report.objects,
            report.from_version,
            report.to_version,
            report.output.display()
        );
    }
}

pub fn print_config(report: &ConfigReport) {
    if report.created {
        println!("Created {}", report.path.display());
    } else {
        println!("Settings: {}", report.path.display());
    }
    let settings = &report.settings;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("statistics.include_roads"),
        Cell::new(settings.statistics.include_roads),
    ]);
    table.add_row(vec![
        Cell::new("statistics.ignored_templates"),
        Cell::new(settings.statistics.ignored_templates.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("presets.buildings"),
        path_cell(settings.presets.buildings.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("presets.colors"),
        path_cell(settings.presets.colors.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("load.always_force"),
        Cell::new(settings.load.always_force),
    ]);
    println!("{table}");
}

fn shape_label(shape: LayoutShape) -> &'static str {
    match shape {
        LayoutShape::Envelope => "versioned",
        LayoutShape::BareArray => "bare object list",
    }
}

fn path_cell(path: Option<&std::path::Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_building_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
