// mapscrub/src/commands/clean.rs
//! Clean command implementation: the read, backup, rewrite, write pipeline.
//!
//! The transformed buffer is only written after every rule has been applied
//! in memory, so a failure anywhere leaves the target file either untouched
//! or fully rewritten, never partially written.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mapscrub_core::{clean_page, widget_removal_plan};

use crate::ui::report::{print_report, CleanReport};

/// Suffix appended to the input path for the pristine pre-rewrite copy.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Options for a single clean run.
pub struct CleanOptions {
    pub input_path: PathBuf,
    pub dry_run: bool,
    pub quiet: bool,
}

/// The sibling path the backup copy is written to.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// The main operation runner for the mapscrub CLI.
pub fn run_clean(opts: CleanOptions) -> Result<()> {
    info!("Starting cleanup of {}", opts.input_path.display());

    let content = fs::read_to_string(&opts.input_path)
        .with_context(|| format!("Failed to read input file: {}", opts.input_path.display()))?;
    let original_lines = content.split('\n').count();

    let backup_path = backup_path_for(&opts.input_path);
    if !opts.dry_run {
        fs::write(&backup_path, &content)
            .with_context(|| format!("Failed to write backup file: {}", backup_path.display()))?;
        debug!("Backup written to {}", backup_path.display());
    }

    let outcome = clean_page(&content).context("Cleanup pipeline failed")?;
    let final_lines = outcome.content.split('\n').count();

    for item in &outcome.widget_summary {
        debug!(
            "Widget rule '{}' applied ({} occurrence(s)).",
            item.rule_name, item.occurrences
        );
    }

    if !opts.dry_run {
        fs::write(&opts.input_path, &outcome.content)
            .with_context(|| format!("Failed to write output file: {}", opts.input_path.display()))?;
    }

    info!(
        "Cleanup finished: {} debug line(s) removed, {} widget pattern(s) matched.",
        outcome.debug_lines_removed,
        outcome.widget_summary.len()
    );

    if !opts.quiet {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        print_report(
            &mut writer,
            &CleanReport {
                input_path: &opts.input_path,
                backup_path: &backup_path,
                dry_run: opts.dry_run,
                debug_lines_removed: outcome.debug_lines_removed,
                widget_rules_matched: outcome.widget_summary.len(),
                widget_rules_total: widget_removal_plan().rules.len(),
                original_lines,
                final_lines,
            },
            supports_color,
        )?;
    }

    Ok(())
}
