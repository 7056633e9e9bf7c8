// ===== sbcm/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::Path;

use sbcm::engine::report::BatchReport;
use sbcm::engine::verdict::{DistortionVerdict, ImpactVerdict};
use sbcm::error::SbcmResult;

/// Single-value analysis block: input, derived standard block, impact and
/// the verdict line.
pub fn print_single_report(
    value: f64,
    target_ratio: f64,
    standard_block: f64,
    impact: f64,
    verdict: ImpactVerdict,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Input value").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", value)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Target ratio").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", target_ratio * 100.0)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Standard block").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", standard_block)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Impact").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.4}", impact))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Cyan),
    ]);

    println!("\n=== Standard Block Analysis ===");
    println!("{}", table);
    println!("Verdict: {}\n", verdict);
}

/// Worst-first distortion table, truncated to `limit` rows for the console.
pub fn print_batch_report(report: &BatchReport, limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Program").add_attribute(Attribute::Bold),
        Cell::new("Budget (yen)"),
        Cell::new("Beneficiaries"),
        Cell::new("Budget Imp"),
        Cell::new("Coverage Imp"),
        Cell::new("Distortion").fg(Color::Cyan),
        Cell::new("Verdict").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (record, result) in report.rows.iter().take(limit) {
        let verdict_cell = match result.verdict {
            DistortionVerdict::Severe => Cell::new(result.verdict).fg(Color::Red),
            DistortionVerdict::HighCost => Cell::new(result.verdict).fg(Color::Yellow),
            DistortionVerdict::HighEfficiency => Cell::new(result.verdict).fg(Color::Green),
            DistortionVerdict::Normal => Cell::new(result.verdict),
        };

        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", record.settled_budget)),
            Cell::new(format!("{:.0}", record.estimated_beneficiaries)),
            Cell::new(format!("{:.2}", result.budget_impact)),
            Cell::new(format!("{:.4}", result.coverage_impact)),
            Cell::new(format!("{:.1}", result.distortion_index)).fg(Color::Cyan),
            verdict_cell,
        ]);
    }

    println!("\n{}", table);
    if report.len() > limit {
        println!("({} of {} rows shown)", limit, report.len());
    }
}

/// Writes the complete sorted result set. Same rounding as the console:
/// budget impact 2 dp, coverage impact 4 dp, distortion index 1 dp.
pub fn write_batch_csv<P: AsRef<Path>>(report: &BatchReport, path: P) -> SbcmResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "program_name",
        "settled_budget",
        "estimated_beneficiaries",
        "budget_impact",
        "coverage_impact",
        "distortion_index",
        "verdict",
    ])?;

    for (record, result) in &report.rows {
        wtr.write_record([
            record.name.clone(),
            format!("{:.0}", record.settled_budget),
            format!("{:.0}", record.estimated_beneficiaries),
            format!("{:.2}", result.budget_impact),
            format!("{:.4}", result.coverage_impact),
            format!("{:.1}", result.distortion_index),
            result.verdict.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
