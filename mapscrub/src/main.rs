// mapscrub/src/main.rs
//! mapscrub entry point.
//!
//! Parses the CLI, wires up logging, and runs the one-shot cleanup pipeline.
//! Any failure bubbles up to `main`, gets printed to stderr, and turns into a
//! non-zero exit status.

use anyhow::Result;
use clap::Parser;

use mapscrub::cli::Cli;
use mapscrub::commands::clean::{run_clean, CleanOptions};
use mapscrub::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        // Warn so that structural rules that found nothing stay visible.
        logger::init_logger(Some(log::LevelFilter::Warn));
    }

    run_clean(CleanOptions {
        input_path: args.path,
        dry_run: args.dry_run,
        quiet: args.quiet,
    })
}
