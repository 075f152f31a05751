//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_VAR: &str = "TESTENUM_LOG";

/// Installs a stderr fmt subscriber filtered by `TESTENUM_LOG` (default `warn`).
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
