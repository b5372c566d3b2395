//! Terminal rendering for records, stats, option lists and the sidebar tree.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use comarca_model::{DatasetStats, Field, Record, SidebarView, UnitView};

pub const EMPTY_RESULTS: &str = "Nenhum resultado encontrado";
pub const EMPTY_RESULTS_HINT: &str = "Tente ajustar os filtros de busca";

/// Results table, or the empty-state message when nothing matched.
pub fn render_results(records: &[&Record], stats: &DatasetStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", stats_table(stats));
    if records.is_empty() {
        let _ = writeln!(out, "{EMPTY_RESULTS}");
        let _ = writeln!(out, "{EMPTY_RESULTS_HINT}");
    } else {
        let _ = writeln!(out, "{}", records_table(records));
    }
    out
}

pub fn records_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Comarca"),
        header_cell("Unidade ID"),
        header_cell("Unidade"),
        header_cell("Vara"),
        header_cell(Field::Codigo.label()),
    ]);
    apply_records_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.comarca)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.unidade_id),
            Cell::new(&record.unidade),
            Cell::new(&record.vara),
            code_cell(record.codigo.as_deref()),
        ]);
    }
    table
}

pub fn stats_table(stats: &DatasetStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Resultados"),
        header_cell("Comarcas"),
        header_cell("Unidades"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(stats.total_results),
        count_cell(stats.comarcas),
        count_cell(stats.unidades),
    ]);
    table
}

/// One option list as `Label (n):` followed by one option per line.
pub fn render_options(field: Field, options: &[&str]) -> String {
    let mut out = format!("{} ({}):\n", field.label(), options.len());
    if options.is_empty() {
        out.push_str("  (nenhuma opção)\n");
    }
    for option in options {
        let _ = writeln!(out, "  - {option}");
    }
    out
}

/// Plain-text tree of the visible sidebar.
///
/// Varas are listed under expanded units, or under every unit when
/// `expand_all` is set.
pub fn render_sidebar(view: &SidebarView, expand_all: bool) -> String {
    if view.is_empty() {
        return format!("{EMPTY_RESULTS}\n");
    }
    let mut out = String::new();
    for comarca in &view.comarcas {
        let _ = writeln!(
            out,
            "{} ({})",
            comarca.comarca_name,
            plural(comarca.units.len(), "unidade", "unidades")
        );
        for unit in &comarca.units {
            render_unit(&mut out, unit, expand_all);
        }
    }
    out
}

fn render_unit(out: &mut String, unit: &UnitView, expand_all: bool) {
    let marker = if unit.expanded { "▾" } else { "▸" };
    let _ = writeln!(
        out,
        "  {marker} {} ({})",
        unit.unit_name,
        plural(unit.vara_count, "vara", "varas")
    );
    if unit.expanded || expand_all {
        for vara in &unit.varas {
            let _ = writeln!(out, "      {}", vara.vara_name);
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

fn apply_records_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
    ]);
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

fn code_cell(code: Option<&str>) -> Cell {
    match code {
        Some(code) => Cell::new(code).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
