//! Logger setup for the CLI

use log::LevelFilter;
use std::env;

/// Initialize logging.
///
/// Uses `Debug` level when `debug_enabled` is true, otherwise `Warn`, so normal
/// runs only show results. `RUST_LOG` overrides both when set.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A logger may already be installed (e.g. by a test harness)
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
