//! Logging setup.
//!
//! Crates instrument themselves with `tracing` behind their own `tracing`
//! feature. `tracing-json` adds a JSON subscriber for production
//! deployments.

/// Environment variable consulted for the log filter.
pub const LOG_FILTER_ENV: &str = "STRATUM_LOG";

/// Install a global JSON subscriber filtered by [`LOG_FILTER_ENV`]
/// (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
