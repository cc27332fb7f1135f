//! multiply-output-values: run the factory and multiply selected output bins.

mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mf_core::OutputId;
use mf_sim::{FactoryObserver, write_outputs_csv};

use common::{DEFAULT_INPUT, init_logging, run_factory};

#[derive(Parser)]
#[command(
    name = "multiply-output-values",
    about = "Multiply the chip values left in the given output bins"
)]
struct Cli {
    /// Comma-separated list of output bins to multiply, e.g. `0,1,2`.
    #[arg(value_delimiter = ',', required = true)]
    outputs: Vec<u32>,

    /// Location of the instruction file.
    #[arg(short, long = "input-file", default_value = DEFAULT_INPUT)]
    input_file: PathBuf,

    /// Also write every filled output bin to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a line per scan pass to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Prints pass progress when `--verbose` is given.
struct PassPrinter {
    enabled: bool,
}

impl FactoryObserver for PassPrinter {
    fn on_pass_end(&mut self, pass: u64, acted: usize) {
        if self.enabled {
            eprintln!("pass {pass}: {acted} bots acted");
        }
    }
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
    let mut printer = PassPrinter { enabled: cli.verbose };
    let factory = run_factory(&cli.input_file, None, &mut printer)?;

    if let Some(path) = &cli.csv {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_outputs_csv(&factory.outputs, file)?;
    }

    let ids: Vec<OutputId> = cli.outputs.iter().copied().map(OutputId).collect();
    let product = factory.multiply_outputs(&ids)?;
    let listed: Vec<String> = cli.outputs.iter().map(u32::to_string).collect();
    println!(
        "Result of multiplying together the values of one chip in outputs {}: {product}",
        listed.join(","),
    );
    Ok(())
}
