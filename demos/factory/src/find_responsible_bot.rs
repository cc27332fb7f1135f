//! find-responsible-bot: report which bot compares two given chip values.

mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use mf_core::{Chip, TargetPair};
use mf_sim::NoopObserver;

use common::{DEFAULT_INPUT, init_logging, run_factory};

#[derive(Parser)]
#[command(
    name = "find-responsible-bot",
    about = "Find the bot that compares two given microchip values"
)]
struct Cli {
    /// First microchip value.
    low_value: Chip,

    /// Second microchip value.
    high_value: Chip,

    /// Location of the instruction file.
    #[arg(short, long = "input-file", default_value = DEFAULT_INPUT)]
    input_file: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let target = TargetPair::new(cli.low_value, cli.high_value);
    let factory = run_factory(&cli.input_file, Some(target), &mut NoopObserver)?;
    let bot = factory.responsible_bot()?;
    println!(
        "Found the bot responsible for handling microchips \"{}\" and \"{}\": {bot}",
        cli.low_value, cli.high_value,
    );
    Ok(())
}
