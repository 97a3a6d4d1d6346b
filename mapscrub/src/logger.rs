// mapscrub/src/logger.rs
//! Logging setup for the mapscrub CLI.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG` as the baseline.
///
/// When `level` is provided it overrides the filter for mapscrub's own
/// crates. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    builder.format_timestamp(None);

    if let Some(level) = level {
        builder.filter_module("mapscrub", level);
        builder.filter_module("mapscrub_core", level);
    }

    let _ = builder.try_init();
}
