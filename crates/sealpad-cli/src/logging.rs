//! Log subscriber setup.
//!
//! Events go to stderr so `sealpad show` output on stdout stays clean.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `-v` flags win, then `RUST_LOG`, then the
/// config file, then `warn`.
pub fn filter_directive(verbose: u8, env: Option<&str>, configured: Option<&str>) -> String {
    match verbose {
        0 => {}
        1 => return "debug".to_string(),
        _ => return "trace".to_string(),
    }
    if let Some(value) = env.filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }
    configured
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: u8, configured: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(verbose, env.as_deref(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
