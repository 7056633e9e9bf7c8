// ===== sbcm/src/main.rs =====
use clap::{Parser, Subcommand};
use sbcm::config::ScaleConfig;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with reference constants; replaces the built-in flag defaults.
    #[arg(global = true, long)]
    constants: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one published figure against the standard block.
    Single(cmd::single::SingleArgs),
    /// Evaluate a CSV of settled program budgets for one municipality.
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let file_config = match &cli.constants {
        Some(path) => {
            info!("Loading reference constants from: {}", path);
            match ScaleConfig::load_from_file(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => None,
    };

    let outcome = match cli.command {
        Commands::Single(args) => {
            let config = file_config.unwrap_or_else(|| args.config.clone());
            cmd::single::run(&args, &config)
        }
        Commands::Batch(args) => {
            let config = file_config.unwrap_or_else(|| args.config.clone());
            cmd::batch::run(&args, &config)
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
