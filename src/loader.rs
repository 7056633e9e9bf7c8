use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::engine::distortion::ProjectRecord;
use crate::error::{SbcmError, SbcmResult};

pub const COL_NAME: &str = "program_name";
pub const COL_BUDGET: &str = "settled_budget";
pub const COL_BENEFICIARIES: &str = "estimated_beneficiaries";

/// Loads the project table from a CSV file. See `read_projects` for the
/// schema rules.
pub fn load_projects<P: AsRef<Path>>(path: P) -> SbcmResult<Vec<ProjectRecord>> {
    debug!("Loading project table from: {}", path.as_ref().display());
    let file = File::open(path)?;
    read_projects(file)
}

/// Parses the project table from any reader. The header must carry all
/// three required columns; that is checked before a single row is read.
/// Any row with a missing, non-numeric, or negative budget/beneficiary
/// field rejects the whole batch. No best-effort row skipping here: a
/// malformed dataset produces no results at all.
pub fn read_projects<R: Read>(reader: R) -> SbcmResult<Vec<ProjectRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> SbcmResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SbcmError::Schema(format!("missing required column '{}'", name)))
    };
    let name_idx = column(COL_NAME)?;
    let budget_idx = column(COL_BUDGET)?;
    let users_idx = column(COL_BENEFICIARIES)?;

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let rec = result?;
        let name = rec.get(name_idx).unwrap_or("").to_string();
        let settled_budget = numeric_field(&rec, budget_idx, COL_BUDGET, row)?;
        let estimated_beneficiaries = numeric_field(&rec, users_idx, COL_BENEFICIARIES, row)?;

        records.push(ProjectRecord {
            name,
            settled_budget,
            estimated_beneficiaries,
        });
    }

    debug!("Loaded {} project records", records.len());
    Ok(records)
}

fn numeric_field(
    rec: &csv::StringRecord,
    idx: usize,
    col: &str,
    row: usize,
) -> SbcmResult<f64> {
    let raw = rec.get(idx).unwrap_or("");
    let value: f64 = raw.parse().map_err(|_| {
        SbcmError::Schema(format!(
            "column '{}' at data row {} is missing or non-numeric (got '{}')",
            col,
            row + 1,
            raw
        ))
    })?;
    if value < 0.0 || !value.is_finite() {
        return Err(SbcmError::Schema(format!(
            "column '{}' at data row {} must be a finite non-negative number (got '{}')",
            col,
            row + 1,
            raw
        )));
    }
    Ok(value)
}
