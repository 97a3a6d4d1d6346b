// mapscrub-core/src/lib.rs
//! # mapscrub Core Library
//!
//! `mapscrub-core` provides the platform-independent logic for the map-page
//! cleanup tool: an ordered find-and-replace pipeline over an in-memory text
//! buffer, with per-rule match counting. It defines the rewrite rule model,
//! compiles rules into cached regular expressions, and ships the two built-in
//! plans the tool exists for: stripping tagged debug logging lines and
//! removing the embedded Wayback iframe widget.
//!
//! The library is pure and stateless, focusing solely on the transformation
//! of input text based on defined rules, without concerns for I/O or
//! application-specific state management. Reading the target file, writing
//! the backup, and reporting all live in the `mapscrub` CLI crate.
//!
//! ## Modules
//!
//! * `rules`: Defines `RewriteRule`s, ordered `RewritePlan`s, and the two
//!   built-in plans.
//! * `compiler`: Compiles plans into cached `CompiledRules`.
//! * `engine`: The `RegexRewriter` that applies a plan to a buffer.
//! * `cleanup`: One-shot convenience operations (`strip_debug_logs`,
//!   `remove_wayback_widget`, `clean_page`).
//! * `errors`: Structured error types for rule compilation failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use mapscrub_core::strip_debug_logs;
//!
//! let page = "init();\n  console.log('[INIT] booting', state);\nrender();\n";
//! let (cleaned, removed) = strip_debug_logs(page)?;
//! assert_eq!(removed, 1);
//! assert!(!cleaned.contains("console.log"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cleanup;
pub mod compiler;
pub mod engine;
pub mod errors;
pub mod rules;

pub use cleanup::{clean_page, remove_wayback_widget, strip_debug_logs, CleanupOutcome};
pub use compiler::{compile_plan, get_or_compile_plan, CompiledRule, CompiledRules};
pub use engine::{total_occurrences, RegexRewriter};
pub use errors::RewriteError;
pub use rules::{
    debug_log_plan, widget_removal_plan, RewritePlan, RewriteRule, RewriteSummaryItem,
    DEBUG_LOG_TAGS, MAX_PATTERN_LENGTH,
};
