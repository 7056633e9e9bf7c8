use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScaleConfig;
use crate::engine::scale;
use crate::engine::verdict::{classify_distortion, DistortionVerdict};
use crate::error::SbcmResult;

/// Coverage at or below this is treated as no measurable reach.
pub const COVERAGE_EPSILON: f64 = 1e-4;

/// Stand-in distortion index for records with negligible reach: cost per
/// beneficiary is unmeasurable. Large but finite, so sorting and
/// formatting stay well-defined.
pub const SENTINEL_HIGH: f64 = 9999.0;

/// One row of input data: a program's settled budget and its estimated
/// beneficiary headcount. The engine reads these, never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub settled_budget: f64,
    pub estimated_beneficiaries: f64,
}

/// Per-record evaluation output. All three ratios are finite by
/// construction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImpactResult {
    pub budget_impact: f64,
    pub coverage_impact: f64,
    pub distortion_index: f64,
    pub verdict: DistortionVerdict,
}

/// Evaluates every record against the given municipality, preserving input
/// order. Per record:
///
///   budget_impact   = settled_budget / (standard_budget_unit * scale_factor)
///   coverage_impact = estimated_beneficiaries / standard_block_population
///   distortion      = budget_impact / coverage_impact
///
/// with the sentinel substituted when coverage is negligible. Sorting is
/// the caller's concern (see `report::BatchReport`).
pub fn evaluate(
    records: &[ProjectRecord],
    config: &ScaleConfig,
    local_population: u64,
) -> SbcmResult<Vec<ImpactResult>> {
    config.validate()?;

    let scale_factor = scale::scale_factor(local_population, config.standard_block_population)?;
    let local_budget_unit = config.standard_budget_unit * scale_factor;
    let block_population = config.standard_block_population as f64;

    debug!(
        scale_factor,
        local_budget_unit, "Evaluating {} records", records.len()
    );

    let results = records
        .iter()
        .map(|record| {
            let budget_impact = record.settled_budget / local_budget_unit;
            let coverage_impact = record.estimated_beneficiaries / block_population;

            let distortion_index = if coverage_impact <= COVERAGE_EPSILON {
                SENTINEL_HIGH
            } else {
                budget_impact / coverage_impact
            };

            ImpactResult {
                budget_impact,
                coverage_impact,
                distortion_index,
                verdict: classify_distortion(distortion_index),
            }
        })
        .collect();

    Ok(results)
}
