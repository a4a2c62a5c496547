use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thyro_core::{AnalyteAssessment, ReadingUse};
use thyro_model::{AnalyteState, Severity};

use crate::report::{ClassificationReport, RangeReport};

pub fn print_report(report: &ClassificationReport) {
    println!("{}", result_table(report));
    if !report.assessments.is_empty() {
        println!();
        println!("{}", assessment_table(&report.assessments));
    }
}

pub fn print_ranges(report: &RangeReport) {
    println!("{}", range_table(report));
    println!(
        "TSH-only cutoffs: >= {} mIU/L treated as hypothyroid, <= {} mIU/L treated as hyperthyroid",
        report.cutoffs.marked_elevation, report.cutoffs.marked_suppression
    );
}

pub fn result_table(report: &ClassificationReport) -> Table {
    let color = severity_color(report.severity);
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        header_cell("Result"),
        Cell::new(report.headline)
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        header_cell("Outcome"),
        Cell::new(report.outcome.as_str()),
    ]);
    table.add_row(vec![
        header_cell("Severity"),
        Cell::new(report.severity.as_str()).fg(color),
    ]);
    let advisory = if report.severity == Severity::Green {
        report.advisory_text.to_string()
    } else {
        format!("⚠ {}", report.advisory_text)
    };
    table.add_row(vec![header_cell("Advice"), Cell::new(advisory)]);
    table
}

pub fn assessment_table(assessments: &[AnalyteAssessment]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Analyte"),
        header_cell("Value"),
        header_cell("Reference"),
        header_cell("Unit"),
        header_cell("State"),
        header_cell("Used"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for assessment in assessments {
        table.add_row(vec![
            Cell::new(assessment.analyte.label()).add_attribute(Attribute::Bold),
            Cell::new(assessment.value),
            Cell::new(format!(
                "{}–{}",
                assessment.range.low, assessment.range.high
            )),
            Cell::new(assessment.analyte.unit()),
            state_cell(assessment.state),
            usage_cell(assessment.usage),
        ]);
    }
    table
}

pub fn range_table(report: &RangeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Analyte"),
        header_cell("Low"),
        header_cell("High"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.ranges {
        table.add_row(vec![
            Cell::new(row.label).add_attribute(Attribute::Bold),
            Cell::new(row.low),
            Cell::new(row.high),
            Cell::new(row.unit),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Green => Color::Green,
        Severity::Amber => Color::Yellow,
        Severity::Red => Color::Red,
    }
}

fn state_cell(state: AnalyteState) -> Cell {
    match state {
        AnalyteState::Normal => Cell::new(state.as_str()).fg(Color::Green),
        AnalyteState::Low | AnalyteState::High => Cell::new(state.as_str())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn usage_cell(usage: ReadingUse) -> Cell {
    match usage {
        ReadingUse::Primary => Cell::new("yes"),
        ReadingUse::Substituted => Cell::new("yes (fallback)"),
        ReadingUse::Superseded | ReadingUse::Ignored => Cell::new("no").fg(Color::DarkGrey),
    }
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
