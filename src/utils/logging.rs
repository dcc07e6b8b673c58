//! Tracing subscriber setup

use tracing::Level;

/// Install a stderr fmt subscriber. `verbose` lowers the threshold from
/// WARN to DEBUG. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
