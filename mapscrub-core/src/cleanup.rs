//! `cleanup.rs`
//! High-level one-shot cleanup operations over a page's text content.
//!
//! These are the entry points the CLI uses: strip the debug logging lines,
//! remove the embedded Wayback widget, or run the whole pipeline. All three
//! are pure string-to-string transformations; file I/O stays with the caller.

use anyhow::Result;

use crate::engine::{total_occurrences, RegexRewriter};
use crate::rules::{debug_log_plan, widget_removal_plan, RewriteSummaryItem};

/// The result of running the full cleanup pipeline over a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOutcome {
    /// The fully rewritten page content.
    pub content: String,
    /// Cumulative count of debug logging lines removed across all tag
    /// patterns plus the `console.debug` catch-all.
    pub debug_lines_removed: usize,
    /// Per-rule tallies for the widget removal step. Rules that found
    /// nothing are absent; an empty summary means the page carried no
    /// widget markup.
    pub widget_summary: Vec<RewriteSummaryItem>,
}

/// Removes debug `console.log`/`console.debug` lines and reports how many
/// lines were deleted.
pub fn strip_debug_logs(content: &str) -> Result<(String, usize)> {
    let rewriter = RegexRewriter::new(debug_log_plan())?;
    let (rewritten, summary) = rewriter.apply(content);
    Ok((rewritten, total_occurrences(&summary)))
}

/// Removes the embedded Wayback iframe widget, its CSS, and its show/hide
/// control logic, and rewrites the hint paragraph into a plain external
/// link. Absent patterns are zero-match no-ops, not errors.
pub fn remove_wayback_widget(content: &str) -> Result<(String, Vec<RewriteSummaryItem>)> {
    let rewriter = RegexRewriter::new(widget_removal_plan())?;
    Ok(rewriter.apply(content))
}

/// Runs both cleanup steps in order: debug-log stripping first, widget
/// removal second.
pub fn clean_page(content: &str) -> Result<CleanupOutcome> {
    let (stripped, debug_lines_removed) = strip_debug_logs(content)?;
    let (content, widget_summary) = remove_wayback_widget(&stripped)?;

    Ok(CleanupOutcome {
        content,
        debug_lines_removed,
        widget_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_debug_logs_deletes_whole_tagged_lines() -> Result<()> {
        let page = "boot();\n  console.log('[INIT] map booting');\nrender();\n";
        let (cleaned, removed) = strip_debug_logs(page)?;
        assert_eq!(removed, 1);
        assert!(!cleaned.contains("console.log"));
        assert!(cleaned.contains("boot();"));
        assert!(cleaned.contains("render();"));
        Ok(())
    }

    #[test]
    fn console_warn_is_never_stripped() -> Result<()> {
        let page = "console.warn('[INIT] degraded mode');\n";
        let (cleaned, removed) = strip_debug_logs(page)?;
        assert_eq!(removed, 0);
        assert_eq!(cleaned, page);
        Ok(())
    }

    #[test]
    fn widget_removal_is_a_no_op_without_widget_markup() -> Result<()> {
        let page = "<html><body><p>plain page</p></body></html>\n";
        let (cleaned, summary) = remove_wayback_widget(page)?;
        assert_eq!(cleaned, page);
        assert!(summary.is_empty());
        Ok(())
    }

    #[test]
    fn clean_page_chains_both_steps() -> Result<()> {
        let page = "\
<div id=\"wayback-iframe-container\"><iframe></iframe></div>
setup();
  console.log('[MAP] view ready');
keep();
";
        let outcome = clean_page(page)?;
        assert_eq!(outcome.debug_lines_removed, 1);
        assert_eq!(outcome.widget_summary.len(), 1);
        assert_eq!(outcome.widget_summary[0].rule_name, "iframe_container");
        assert!(!outcome.content.contains("wayback-iframe-container"));
        assert!(outcome.content.contains("keep();"));
        Ok(())
    }
}
