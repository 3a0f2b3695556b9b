//! Diagnostic tracing.
//!
//! - **Tracing (this module)**: dev diagnostics via `RUST_LOG`, output to stderr.
//! - **Run log (`events`)**: optional NDJSON audit file, unaffected by `RUST_LOG`.
//! - **Report**: the solve/check output on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// ```bash
/// RUST_LOG=mazewalk=trace mazewalk solve maze.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
