//! Tracing setup shared by every Fitplan binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at the default `warn` level.
///
/// The CLI prints its results on stdout, so diagnostics stay quiet unless
/// asked for. `FITPLAN_LOG` (or `RUST_LOG`) overrides the level.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with an explicit default level.
pub fn init_with_level(default_level: &str) {
    let filter = env_filter(default_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(spec) = std::env::var("FITPLAN_LOG") {
        if let Ok(filter) = EnvFilter::try_new(spec) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize logging for tests, writing through the test harness.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
