//! Rule definitions for `mapscrub-core`.
//!
//! This module defines the core data structures for rewrite rules and ordered
//! rewrite plans, plus the two built-in plans the tool ships with: debug-log
//! stripping and Wayback widget removal. All patterns are literal constants;
//! there is no rule-config file.
//!
//! License: MIT OR APACHE 2.0

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The bracketed tags that mark a `console.log` call as debug output.
///
/// Order matters: plans are applied rule by rule, and later rules operate on
/// the output of earlier rules.
pub const DEBUG_LOG_TAGS: [&str; 18] = [
    "FOLLOW DEBUG",
    "ADD LAYER",
    "FILTER",
    "WAYBACK",
    "HASHCHANGE",
    "INIT",
    "UI",
    "MAP",
    "FOLLOW BTN",
    "FOLLOW OFFSET",
    "FOLLOW START",
    "FOLLOW CHECK",
    "FOLLOW",
    "HASH PARSE",
    "HASH",
    "MAP UI",
    "FILTER INPUT",
    "FILTER PROPS",
];

/// Represents a single find-and-replace rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "iframe_container").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// The string to replace matches with. Empty means deletion.
    pub replace_with: String,
    /// If true, enables multiline mode (`^`/`$` match at line boundaries).
    pub multiline: bool,
    /// If true, the dot character `.` in the regex will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, the rule deletes a structural block that is expected to be
    /// present exactly once; a zero-match application is surfaced as a
    /// warning instead of passing silently.
    pub structural: bool,
}

impl Default for RewriteRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            replace_with: String::new(),
            multiline: false,
            dot_matches_new_line: false,
            structural: false,
        }
    }
}

/// An ordered list of rewrite rules.
///
/// Rule order is significant: each rule consumes the buffer produced by the
/// previous one, so overlapping patterns must be listed in the order they are
/// meant to win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RewritePlan {
    pub rules: Vec<RewriteRule>,
}

/// Per-rule match tally produced by applying a plan.
///
/// Only rules that matched at least once appear in a summary; an empty
/// summary means the buffer came through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

fn tagged_console_log_rule(tag: &str) -> RewriteRule {
    RewriteRule {
        name: format!("console_log_{}", tag.to_lowercase().replace(' ', "_")),
        description: Some(format!("console.log call tagged [{tag}]")),
        pattern: Some(format!(
            r"\s*console\.log\([^)]*\[{}\][^)]*\);?\n",
            regex::escape(tag)
        )),
        ..RewriteRule::default()
    }
}

/// The debug-log stripping plan: one rule per tag in [`DEBUG_LOG_TAGS`], plus
/// a catch-all for `console.debug` calls with no tag requirement.
///
/// Matching is line-oriented: each pattern consumes leading whitespace, the
/// call, a trailing optional semicolon, and the newline, so the whole logical
/// source line goes away. The argument match is bounded at the first `)`;
/// calls with nested parenthesized arguments are left in place. That is the
/// documented precision limit of these patterns, not something to fix here.
/// `console.warn` is never matched.
pub fn debug_log_plan() -> RewritePlan {
    let mut rules: Vec<RewriteRule> = DEBUG_LOG_TAGS
        .iter()
        .map(|tag| tagged_console_log_rule(tag))
        .collect();
    rules.push(RewriteRule {
        name: "console_debug".to_string(),
        description: Some("Any console.debug call, tagged or not".to_string()),
        pattern: Some(r"\s*console\.debug\([^)]*\);?\n".to_string()),
        ..RewriteRule::default()
    });
    RewritePlan { rules }
}

/// The Wayback widget removal plan.
///
/// Seven ordered structural rules: the iframe container markup, its CSS, the
/// hint-paragraph link rewrite, and the four script fragments that toggled
/// the container's visibility. The brace-tail patterns depend on the target
/// file's literal indentation; `form_close_hide` must run before
/// `layer_add_hide` so the indented variant is consumed first.
pub fn widget_removal_plan() -> RewritePlan {
    RewritePlan {
        rules: vec![
            RewriteRule {
                name: "iframe_container".to_string(),
                description: Some("The embedded Wayback iframe container div".to_string()),
                pattern: Some(r#"<div id="wayback-iframe-container">.*?</div>\s*\n"#.to_string()),
                dot_matches_new_line: true,
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "iframe_css".to_string(),
                description: Some(
                    "The WAYBACK IFRAME style section, through the #wayback-iframe rule body"
                        .to_string(),
                ),
                pattern: Some(
                    r"\s*/\* ==.*WAYBACK IFRAME.*== \*/\n.*?#wayback-iframe \{[^}]+}\n".to_string(),
                ),
                dot_matches_new_line: true,
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "hint_link".to_string(),
                description: Some(
                    "Rewrites the satellite-tab hint to link out to the Wayback site".to_string(),
                ),
                pattern: Some(
                    r#"<p class="hint" style="font-size: 11px; margin: 4px 0 0; color: rgba\(255,255,255,0\.8\);">\s*choose the date from the list on the <a id="wayback-open-new"[^>]+>Wayback site</a> and enter it in the date picker\s*</p>"#
                        .to_string(),
                ),
                replace_with:
                    r#"<p class="hint" style="font-size: 11px; margin: 4px 0 0; color: rgba(255,255,255,0.8);">Choose date from the <a id="wayback-open-link" href="https://livingatlas.arcgis.com/wayback/" target="_blank" rel="noopener noreferrer" style="color:#9fd1ff;text-decoration:underline;">Wayback Imagery site</a></p>"#
                        .to_string(),
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "tab_toggle".to_string(),
                description: Some(
                    "The show/hide block in the tab-switching logic".to_string(),
                ),
                pattern: Some(r"    // Show/hide Wayback iframe\n.*?}\n    }\n".to_string()),
                dot_matches_new_line: true,
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "form_close_hide".to_string(),
                description: Some(
                    "The container hide on form close (exact literal fragment)".to_string(),
                ),
                pattern: Some(
                    r"        // Will close - just hide the Wayback container if visible\n        const waybackContainer = document\.getElementById\('wayback-iframe-container'\);\n        if \(waybackContainer\) waybackContainer\.classList\.remove\('active'\);\n"
                        .to_string(),
                ),
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "layer_add_hide".to_string(),
                description: Some(
                    "The container hide after a layer is added (exact literal fragment)"
                        .to_string(),
                ),
                pattern: Some(
                    r"    const waybackContainer = document\.getElementById\('wayback-iframe-container'\);\n    if \(waybackContainer\) waybackContainer\.classList\.remove\('active'\);\n"
                        .to_string(),
                ),
                structural: true,
                ..RewriteRule::default()
            },
            RewriteRule {
                name: "status_monitor".to_string(),
                description: Some(
                    "The message listener that mirrored iframe status updates".to_string(),
                ),
                pattern: Some(
                    r"  // Minimal status updates for the Wayback iframe\n.*?}\n  }\n}\);\n\n"
                        .to_string(),
                ),
                dot_matches_new_line: true,
                structural: true,
                ..RewriteRule::default()
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_plan_has_one_rule_per_tag_plus_catch_all() {
        let plan = debug_log_plan();
        assert_eq!(plan.rules.len(), DEBUG_LOG_TAGS.len() + 1);
        assert_eq!(plan.rules.last().unwrap().name, "console_debug");
        assert!(plan.rules.iter().all(|r| !r.structural));
    }

    #[test]
    fn tag_rule_names_are_slugged() {
        let rule = tagged_console_log_rule("FOLLOW DEBUG");
        assert_eq!(rule.name, "console_log_follow_debug");
        assert!(rule.pattern.unwrap().starts_with(r"\s*console\.log\("));
    }

    #[test]
    fn widget_plan_is_all_structural_and_ordered() {
        let plan = widget_removal_plan();
        assert!(plan.rules.iter().all(|r| r.structural));
        let names: Vec<&str> = plan.rules.iter().map(|r| r.name.as_str()).collect();
        // form_close_hide must come before layer_add_hide (indentation overlap).
        let form = names.iter().position(|n| *n == "form_close_hide").unwrap();
        let layer = names.iter().position(|n| *n == "layer_add_hide").unwrap();
        assert!(form < layer);
    }

    #[test]
    fn all_builtin_patterns_fit_the_length_cap() {
        for rule in debug_log_plan()
            .rules
            .iter()
            .chain(widget_removal_plan().rules.iter())
        {
            let pattern = rule.pattern.as_ref().unwrap();
            assert!(
                pattern.len() <= MAX_PATTERN_LENGTH,
                "pattern for '{}' is {} bytes",
                rule.name,
                pattern.len()
            );
        }
    }
}
