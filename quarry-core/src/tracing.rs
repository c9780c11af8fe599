//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// The filter comes from the `QUARRY_LOG` environment variable, falling back
/// to `info`. Safe to call more than once; only the first call installs a
/// subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUARRY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
