use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, EnvFilter};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Initialize the tracing subscriber with timestamp, level, and structured fields.
/// If `debug` is true, sets the log level to DEBUG; otherwise INFO.
///
/// Logs go to stderr; stdout is reserved for the generated source.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .init();
}

/// Set the global verbose mode flag.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Check whether verbose mode is currently enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}
