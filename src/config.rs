use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{SbcmError, SbcmResult};

/// Reference constants for the Standard Block Comparison Method.
///
/// The flag defaults are the Japanese baselines: total population and
/// municipality count from the 2023 estimates, and the standard block
/// (average municipality population) with its reference budget unit.
/// Every engine entry point takes this struct explicitly; nothing reads
/// a process-wide constant.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Total population of the reference region.
    #[arg(long, default_value_t = 124_000_000)]
    pub total_population: u64,

    /// Number of basic administrative units in the reference region.
    #[arg(long, default_value_t = 1_718)]
    pub municipality_count: u64,

    /// Share of the population the program targets, 0.0 to 1.0.
    #[arg(long, default_value_t = 1.0)]
    pub target_ratio: f64,

    /// Population of one standard block (the average municipality).
    #[arg(long, default_value_t = 72_176)]
    pub standard_block_population: u64,

    /// Reference spend for one standard block, in yen.
    #[arg(long, default_value_t = 10_000_000.0)]
    pub standard_budget_unit: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            total_population: 124_000_000,
            municipality_count: 1_718,
            target_ratio: 1.0,
            standard_block_population: 72_176,
            standard_budget_unit: 10_000_000.0,
        }
    }
}

impl ScaleConfig {
    /// Rejects configurations the engine cannot work with. A zero
    /// `target_ratio` is allowed (it degenerates to a zero-sized block,
    /// which the impact calculator handles); everything else must be
    /// strictly positive.
    pub fn validate(&self) -> SbcmResult<()> {
        if self.total_population == 0 {
            return Err(SbcmError::InvalidConfiguration(
                "total_population must be positive".to_string(),
            ));
        }
        if self.municipality_count == 0 {
            return Err(SbcmError::InvalidConfiguration(
                "municipality_count must be positive".to_string(),
            ));
        }
        if self.standard_block_population == 0 {
            return Err(SbcmError::InvalidConfiguration(
                "standard_block_population must be positive".to_string(),
            ));
        }
        if !(self.standard_budget_unit > 0.0) {
            return Err(SbcmError::InvalidConfiguration(
                "standard_budget_unit must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.target_ratio) {
            return Err(SbcmError::InvalidConfiguration(format!(
                "target_ratio must be within [0, 1], got {}",
                self.target_ratio
            )));
        }
        Ok(())
    }

    /// Loads reference constants from a JSON file. Fields absent from the
    /// file keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SbcmResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
