use clap::Args;
use sbcm::config::ScaleConfig;
use sbcm::engine::distortion;
use sbcm::engine::report::BatchReport;
use sbcm::error::SbcmResult;
use sbcm::loader;
use tracing::info;

use crate::reports;

/// Rows shown on the console; the full set goes to `--out`.
const CONSOLE_ROW_LIMIT: usize = 10;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Input CSV with program_name, settled_budget, estimated_beneficiaries.
    pub csv_file: String,

    /// Population of the municipality under review.
    #[arg(long, default_value_t = 435_000)]
    pub pop: u64,

    /// Write the complete sorted result set to this CSV file.
    #[arg(short, long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub config: ScaleConfig,
}

pub fn run(args: &BatchArgs, config: &ScaleConfig) -> SbcmResult<()> {
    info!(
        "Analyzing '{}' (city population: {}, standard block: {}, budget unit: {})",
        args.csv_file, args.pop, config.standard_block_population, config.standard_budget_unit
    );

    let records = loader::load_projects(&args.csv_file)?;
    let results = distortion::evaluate(&records, config, args.pop)?;
    let report = BatchReport::build(records, results);

    reports::print_batch_report(&report, CONSOLE_ROW_LIMIT);

    if let Some(path) = &args.out {
        reports::write_batch_csv(&report, path)?;
        info!("Full result set written to: {}", path);
    }

    Ok(())
}
