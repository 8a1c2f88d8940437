//! Tracing setup for the `mahana` binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable read before `RUST_LOG`
pub const LOG_ENV: &str = "MAHANA_LOG";

const DEFAULT_FILTER: &str = "mahana=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(
            std::env::var(LOG_ENV).ok(),
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        );

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn build_filter(mahana_log: Option<String>, rust_log: Option<String>) -> EnvFilter {
    [mahana_log, rust_log]
        .into_iter()
        .flatten()
        .filter(|directives| !directives.trim().is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
