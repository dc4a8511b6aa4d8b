//! animevents CLI Tool
//!
//! Command-line interface for dumping the notify events of exported animation
//! JSON files to tab-separated timelines.

use animevents_core::convert::extract_file;
use animevents_core::timeline::write_timeline;
use animevents_core::{convert_file, ConvertOptions};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "animevents")]
#[command(about = "Dump AnimSequence/AnimMontage notify events to a tab-separated timeline")]
#[command(version)]
struct Cli {
    /// Exported animation JSON files
    #[arg(required = true, value_name = "JSON")]
    inputs: Vec<PathBuf>,

    /// Write a column header line before the events
    #[arg(long)]
    header: bool,

    /// Print timelines to stdout instead of writing <name>_events.txt files
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

/// Converts every input independently; fails if any of them failed
fn run(cli: &Cli) -> Result<()> {
    let options = ConvertOptions { header: cli.header };
    let mut failed = 0;

    for input in &cli.inputs {
        let outcome = if cli.stdout {
            print_timeline(input, &options)
        } else {
            save_timeline(input, &options)
        };

        if let Err(e) = outcome {
            log::debug!("{}: {:?}", input.display(), e);
            eprintln!("{}: {:#}", input.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, cli.inputs.len());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

fn save_timeline(input: &Path, options: &ConvertOptions) -> Result<()> {
    let out = convert_file(input, options)?;
    println!("Saved → {}", out.display());
    Ok(())
}

fn print_timeline(input: &Path, options: &ConvertOptions) -> Result<()> {
    let lines = extract_file(input)?;
    write_timeline(io::stdout().lock(), &lines, options.header)
        .context("Failed to write timeline to stdout")?;
    Ok(())
}
