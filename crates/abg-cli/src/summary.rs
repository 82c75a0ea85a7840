use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abg_intake::ADVISORY_RANGES;
use abg_model::{CompensationResult, PhStatus};

use crate::report::Evaluation;

pub fn print_evaluation(evaluation: &Evaluation) {
    print!("{}", render_findings(evaluation));
    println!();
    println!("{}", summary_table(evaluation));
}

/// Plain-text findings block printed above the summary table.
pub fn render_findings(evaluation: &Evaluation) -> String {
    let result = &evaluation.result;
    let mut out = String::new();
    if !evaluation.warnings.is_empty() {
        out.push_str("Warnings:\n");
        for warning in &evaluation.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }
    let _ = writeln!(out, "pH status: {}", result.ph_status);
    let disorders: Vec<String> = result
        .disorders
        .iter()
        .map(|label| label.as_str().to_owned())
        .collect();
    let _ = writeln!(out, "Disorders: {}", join_or_none(&disorders, ", "));
    let _ = writeln!(
        out,
        "Mixed disorder: {}",
        if result.is_mixed { "yes" } else { "no" }
    );
    if let Some(compensation) = &result.compensation {
        let _ = writeln!(out, "Compensation: {}", compensation_text(compensation));
    }
    if let Some(mixed) = &result.mixed {
        let _ = writeln!(out, "Primary disorder: {}", mixed.primary);
        let _ = writeln!(out, "Concomitant disorder: {}", mixed.concomitant);
        if let Some(contribution) = &mixed.contribution {
            let _ = writeln!(out, "Estimated pH: {:.3}", contribution.net_ph);
        }
    }
    let _ = writeln!(
        out,
        "Diagnosis: {}",
        join_or_none(&result.diagnosis_labels(), "; ")
    );
    out
}

fn compensation_text(compensation: &CompensationResult) -> String {
    match compensation {
        CompensationResult::Respiratory { expected_ph, .. } => format!(
            "{} (expected pH {:.3})",
            compensation.type_label(),
            expected_ph
        ),
        CompensationResult::Metabolic { expected_paco2, .. } => format!(
            "{} (expected PaCO2 {:.1} mmHg)",
            compensation.type_label(),
            expected_paco2
        ),
    }
}

fn join_or_none(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(separator)
    }
}

/// Parameter / Value / Interpretation table of the panel and anion gap.
pub fn summary_table(evaluation: &Evaluation) -> Table {
    let panel = &evaluation.panel;
    let gap = evaluation.result.anion_gap;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Value"),
        header_cell("Interpretation"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("pH"),
        Cell::new(panel.ph),
        ph_status_cell(evaluation.result.ph_status),
    ]);
    let measured = [
        ("PaCO2", panel.paco2, "mmHg"),
        ("[HCO3-]", panel.bicarbonate, "mEq/L"),
        ("[Na+]", panel.sodium, "mEq/L"),
        ("[Cl-]", panel.chloride, "mEq/L"),
        ("Albumin", panel.albumin, "g/dL"),
    ];
    for (name, value, unit) in measured {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(value),
            Cell::new(format!("{value} {unit}")),
        ]);
    }
    let derived = [
        ("Anion Gap", gap.map(|gap| gap.anion_gap)),
        ("AG Corrected", gap.map(|gap| gap.corrected)),
        ("Excess AG (DAG)", gap.map(|gap| gap.excess)),
    ];
    for (name, value) in derived {
        table.add_row(vec![Cell::new(name), gap_value_cell(value), gap_unit_cell(value)]);
    }
    table
}

/// Advisory normal ranges as a table.
pub fn ranges_table() -> Table {
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
    for range in ADVISORY_RANGES {
        table.add_row(vec![
            Cell::new(range.analyte),
            Cell::new(range.low),
            Cell::new(range.high),
            match range.unit {
                Some(unit) => Cell::new(unit),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

fn ph_status_cell(status: PhStatus) -> Cell {
    match status {
        PhStatus::Acidemic => Cell::new(status).fg(Color::Red),
        PhStatus::Alkalemic => Cell::new(status).fg(Color::Yellow),
        PhStatus::Normal => Cell::new(status).fg(Color::Green),
    }
}

fn gap_value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.1}")).add_attribute(Attribute::Bold),
        None => dim_cell("N/A"),
    }
}

fn gap_unit_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.1} mEq/L")),
        None => dim_cell("N/A"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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
