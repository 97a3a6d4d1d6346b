// mapscrub/src/ui/report.rs
//! Console report for a clean run.
//!
//! Output is human-readable only; nothing here is meant to be parsed. Color
//! is applied when the caller says the stream supports it and skipped
//! otherwise, so piped output stays plain.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};
use std::path::Path;

/// Everything the report needs to know about a finished run.
pub struct CleanReport<'a> {
    pub input_path: &'a Path,
    pub backup_path: &'a Path,
    pub dry_run: bool,
    pub debug_lines_removed: usize,
    pub widget_rules_matched: usize,
    pub widget_rules_total: usize,
    pub original_lines: usize,
    pub final_lines: usize,
}

const BANNER_WIDTH: usize = 50;

fn paint(text: &str, color: AnsiColors, enable_color: bool) -> String {
    if enable_color {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Formats a count with thousands separators ("12345" -> "12,345").
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn print_report(
    writer: &mut impl Write,
    report: &CleanReport<'_>,
    enable_color: bool,
) -> io::Result<()> {
    let check = paint("\u{2713}", AnsiColors::Green, enable_color);

    if report.dry_run {
        writeln!(
            writer,
            "{}",
            paint("DRY RUN: no files were written", AnsiColors::Yellow, enable_color)
        )?;
    } else {
        writeln!(
            writer,
            "{} Created backup: {}",
            check,
            report.backup_path.display()
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "{} Removed {} debug console.log statements",
        check, report.debug_lines_removed
    )?;
    writeln!(
        writer,
        "{} Replaced embedded Wayback iframe with external link",
        check
    )?;

    let lines_removed = report.original_lines.saturating_sub(report.final_lines);
    let percent = lines_removed as f64 / report.original_lines.max(1) as f64 * 100.0;

    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(
        writer,
        "{}",
        paint("CLEANUP COMPLETE", AnsiColors::Green, enable_color)
    )?;
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(
        writer,
        "Original lines:    {}",
        group_thousands(report.original_lines)
    )?;
    writeln!(
        writer,
        "Final lines:       {}",
        group_thousands(report.final_lines)
    )?;
    writeln!(
        writer,
        "Lines removed:     {} ({:.1}%)",
        group_thousands(lines_removed),
        percent
    )?;
    writeln!(
        writer,
        "Widget patterns:   {} of {} matched",
        report.widget_rules_matched, report.widget_rules_total
    )?;

    if !report.dry_run {
        writeln!(writer)?;
        writeln!(writer, "Output written to: {}", report.input_path.display())?;
        writeln!(writer, "Backup saved to:   {}", report.backup_path.display())?;
    }

    Ok(())
}
