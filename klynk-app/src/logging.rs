//! Logging setup
//!
//! Logs go to stderr so they never interleave with the screens on
//! stdout. `RUST_LOG` replaces the configured level when set.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG` or the configured level
pub fn env_filter(level: &str) -> EnvFilter {
    env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(level), EnvFilter::new)
}

/// Install the global subscriber
///
/// A second call is ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(env_filter(level))
        .try_init();
}
