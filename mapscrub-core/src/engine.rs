//! The ordered regex rewrite engine.
//!
//! `RegexRewriter` applies a compiled `RewritePlan` to an in-memory text
//! buffer, one rule at a time and in plan order, tracking how many matches
//! each rule removed or replaced. Each step consumes one buffer and produces
//! the next; nothing is written anywhere until the caller decides to.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Arc;

use crate::compiler::{get_or_compile_plan, CompiledRules};
use crate::rules::{RewritePlan, RewriteSummaryItem};

#[derive(Debug)]
pub struct RegexRewriter {
    compiled: Arc<CompiledRules>,
    plan: RewritePlan,
}

impl RegexRewriter {
    pub fn new(plan: RewritePlan) -> Result<Self> {
        let compiled = get_or_compile_plan(&plan)
            .context("Failed to compile rewrite plan for RegexRewriter")?;

        Ok(Self { compiled, plan })
    }

    /// Returns the plan this rewriter was built from.
    pub fn plan(&self) -> &RewritePlan {
        &self.plan
    }

    /// Returns a reference to the compiled rules backing this rewriter.
    pub fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled
    }

    /// Applies every rule in plan order and returns the rewritten buffer
    /// together with a per-rule match summary.
    ///
    /// A rule that matches zero times leaves the buffer untouched and
    /// contributes nothing to the summary; structural rules additionally log
    /// a warning so a drifted target file does not fail silently.
    pub fn apply(&self, content: &str) -> (String, Vec<RewriteSummaryItem>) {
        let mut buffer = content.to_string();
        let mut summary = Vec::new();

        for rule in &self.compiled.rules {
            let occurrences = rule.regex.find_iter(&buffer).count();
            if occurrences == 0 {
                if rule.structural {
                    warn!(
                        "Rule '{}' matched nothing; expected block not found in the target.",
                        rule.name
                    );
                }
                continue;
            }

            debug!("Rule '{}' matched {} time(s).", rule.name, occurrences);
            let rewritten = rule
                .regex
                .replace_all(&buffer, rule.replace_with.as_str())
                .into_owned();
            buffer = rewritten;
            summary.push(RewriteSummaryItem {
                rule_name: rule.name.clone(),
                occurrences,
            });
        }

        (buffer, summary)
    }
}

/// Sums the occurrence counts across a summary.
pub fn total_occurrences(summary: &[RewriteSummaryItem]) -> usize {
    summary.iter().map(|item| item.occurrences).sum()
}
