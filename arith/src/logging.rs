//! Diagnostic tracing for the `arith` binary.
//!
//! The library only emits events; this is where a subscriber gets installed.
//! Output goes to stderr so stdout carries nothing but results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to `default_directive` (the config's
/// `log_level`) when it is unset or unparsable. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=arith=debug arith divide 5 2
/// ```
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
