// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// `clap` and delegates everything else to Layer 2.
//
//   joint-nlu-data prepare --data-path train.csv
//   joint-nlu-data prepare --data-path dev.csv --split eval
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs};

use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase};

#[derive(Parser, Debug)]
#[command(
    name = "joint-nlu-data",
    version,
    about = "Prepare CSV data for joint intent classification and slot filling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from '{}'", path.display());
            let mut config = PrepareConfig::from_json_file(path)?;
            args.apply(&mut config);
            config
        }
        None => args.into(),
    };

    let report = PrepareUseCase::new(config).execute()?;

    println!(
        "Prepared {} split: {} of {} rows kept ({} dropped)",
        report.split,
        report.examples,
        report.rows,
        report.dropped
    );
    println!(
        "Label spaces: {} intents, {} tags",
        report.num_intent_labels,
        report.num_tag_labels
    );
    println!("Examples written to {}", report.examples_path.display());
    Ok(())
}
