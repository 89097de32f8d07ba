//! Log setup for hosts that embed the core.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` syntax (e.g. `"info"`,
/// `"clinic_board_core=debug"`); an unparsable filter falls back to `info`.
/// Returns false if a subscriber was already installed.
pub fn install(filter: &str) -> bool {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
