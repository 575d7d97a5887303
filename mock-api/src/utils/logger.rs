//! Logging infrastructure
//!
//! Structured logging setup shared by the demo binary-less library and
//! its consumers.

/// Initialize the logger at the default `info` level
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an optional level override
pub fn init_logger_with_level(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");

    // try_init: repeated initialization (e.g. across tests) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
