// mapscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the mapscrub
//! application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// The path the tool operates on when none is given.
pub const DEFAULT_TARGET: &str = "map/index.html";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mapscrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip debug logging and the embedded Wayback iframe from the map page",
    long_about = "Mapscrub is a one-shot maintenance tool for the map page. It removes tagged debug console.log statements and console.debug calls, deletes the embedded Wayback imagery iframe together with its CSS and show/hide logic, and points the date hint at the Wayback site directly. The original file is copied to a .backup sibling before anything is written.",
)]
pub struct Cli {
    /// The HTML file to clean in place.
    #[arg(value_name = "FILE", default_value = DEFAULT_TARGET, help = "The HTML file to clean in place.")]
    pub path: PathBuf,

    /// Disable the console report
    #[arg(long, short = 'q', help = "Suppress the cleanup report.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the mapscrub crates)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Compute and report the changes without writing the file or a backup.
    #[arg(long, help = "Report what would change without writing anything.")]
    pub dry_run: bool,
}
