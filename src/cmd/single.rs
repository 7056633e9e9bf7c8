use clap::Args;
use sbcm::config::ScaleConfig;
use sbcm::engine::{impact, scale, verdict};
use sbcm::error::SbcmResult;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct SingleArgs {
    /// Published outcome figure: a beneficiary headcount or a yen amount.
    #[arg(short, long)]
    pub value: f64,

    #[command(flatten)]
    pub config: ScaleConfig,
}

pub fn run(args: &SingleArgs, config: &ScaleConfig) -> SbcmResult<()> {
    config.validate()?;

    let block = scale::standard_block(config)?;
    let ratio = impact::impact(args.value, block);
    let verdict = verdict::classify_impact(ratio);

    reports::print_single_report(args.value, config.target_ratio, block, ratio, verdict);
    Ok(())
}
