use crate::config::ScaleConfig;
use crate::error::{SbcmError, SbcmResult};

/// Standard block: the average target headcount attributable to one
/// administrative unit, `total_population * target_ratio / municipality_count`.
///
/// A zero `municipality_count` is a caller bug, not a data edge case, and
/// fails fast. A zero `target_ratio` is legal and yields a zero block.
pub fn standard_block(config: &ScaleConfig) -> SbcmResult<f64> {
    if config.municipality_count == 0 {
        return Err(SbcmError::InvalidConfiguration(
            "municipality_count must be positive".to_string(),
        ));
    }
    Ok(config.total_population as f64 * config.target_ratio / config.municipality_count as f64)
}

/// Ratio of a municipality's population to the standard block population.
/// Used to localize the reference budget unit: a city of 435,000 against a
/// 72,176 block gets a factor of ~6.0.
pub fn scale_factor(local_population: u64, standard_block_population: u64) -> SbcmResult<f64> {
    if standard_block_population == 0 {
        return Err(SbcmError::InvalidConfiguration(
            "standard_block_population must be positive".to_string(),
        ));
    }
    if local_population == 0 {
        return Err(SbcmError::InvalidConfiguration(
            "local population must be positive".to_string(),
        ));
    }
    Ok(local_population as f64 / standard_block_population as f64)
}
