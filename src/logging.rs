/*
 * Logging Module
 *
 * Sets up env_logger for the whole process. The simulation logs through the
 * `log` macros: info for lifecycle events, debug for per-frame detail and
 * warn for degenerate particle updates.
 */

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` picks debug level and the
/// default is info.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A second init (tests, embedding) keeps the first logger
    let _ = builder.try_init();
}
