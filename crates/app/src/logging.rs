//! Tracing setup.
//!
//! Logs go to standard error so standard output only carries the result.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ENVSUBST_LOG";

/// Filter used when `ENVSUBST_LOG` is not set.
#[must_use]
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose))),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
