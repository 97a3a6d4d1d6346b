//! compiler.rs - Manages the compilation and caching of rewrite plans.
//!
//! This module converts a `RewritePlan` into `CompiledRules`, which are
//! optimized for efficient application. A global, shared cache avoids
//! redundant compilation when the same plan is applied more than once in a
//! process (the built-in plans are constructed per call site).
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::errors::RewriteError;
use crate::rules::{RewritePlan, RewriteRule, MAX_PATTERN_LENGTH};

/// Represents a single compiled rewrite rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The string to replace matches of this rule's pattern with.
    pub replace_with: String,
    /// The unique name of the rewrite rule.
    pub name: String,
    /// Whether a zero-match application should be surfaced as a warning.
    pub structural: bool,
}

/// Represents a full plan's worth of compiled rules, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled plans.
    /// The key is a hash of the `RewritePlan`.
    static ref COMPILED_PLAN_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `RewritePlan` to create a stable, unique key for the cache.
///
/// Rule order is semantic (later rules see earlier rules' output), so the
/// rules are hashed in plan order rather than sorted.
fn hash_plan(plan: &RewritePlan) -> u64 {
    let mut hasher = DefaultHasher::new();
    plan.rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `RewriteRule`s into `CompiledRules`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_plan(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, RewriteError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        match rule.pattern.as_ref() {
            Some(pattern) => {
                if pattern.len() > MAX_PATTERN_LENGTH {
                    compilation_errors.push(RewriteError::PatternLengthExceeded(
                        rule.name,
                        pattern.len(),
                        MAX_PATTERN_LENGTH,
                    ));
                    continue;
                }

                let regex_result = RegexBuilder::new(pattern)
                    .multi_line(rule.multiline)
                    .dot_matches_new_line(rule.dot_matches_new_line)
                    .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                    .build();

                match regex_result {
                    Ok(regex) => {
                        debug!("Rule '{}' compiled successfully.", &rule.name);
                        compiled_rules.push(CompiledRule {
                            regex,
                            replace_with: rule.replace_with,
                            name: rule.name,
                            structural: rule.structural,
                        });
                    }
                    Err(e) => {
                        compilation_errors.push(RewriteError::RuleCompilationError(rule.name, e));
                    }
                }
            }
            None => {
                warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
                continue;
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(RewriteError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {}.",
            compiled_rules.len()
        );
        Ok(CompiledRules {
            rules: compiled_rules,
        })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled plans. It returns an
/// `Arc` to a `CompiledRules` instance, allowing for cheap sharing.
pub fn get_or_compile_plan(plan: &RewritePlan) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_plan(plan);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_PLAN_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled plan from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    debug!("Compiled plan not found in cache. Compiling now.");
    let compiled = compile_plan(plan.rules.clone())?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_PLAN_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    Ok(compiled_arc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{debug_log_plan, widget_removal_plan};

    #[test]
    fn builtin_plans_compile() {
        assert!(compile_plan(debug_log_plan().rules).is_ok());
        assert!(compile_plan(widget_removal_plan().rules).is_ok());
    }

    #[test]
    fn cache_returns_the_same_instance_for_the_same_plan() {
        let first = get_or_compile_plan(&debug_log_plan()).unwrap();
        let second = get_or_compile_plan(&debug_log_plan()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let rule = RewriteRule {
            name: "huge".to_string(),
            pattern: Some("a".repeat(MAX_PATTERN_LENGTH + 1)),
            ..RewriteRule::default()
        };
        let err = compile_plan(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn invalid_pattern_reports_the_rule_name() {
        let rule = RewriteRule {
            name: "broken".to_string(),
            pattern: Some(r"(unclosed".to_string()),
            ..RewriteRule::default()
        };
        let err = compile_plan(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn missing_pattern_is_skipped_not_fatal() {
        let rule = RewriteRule {
            name: "patternless".to_string(),
            ..RewriteRule::default()
        };
        let compiled = compile_plan(vec![rule]).unwrap();
        assert!(compiled.rules.is_empty());
    }
}
