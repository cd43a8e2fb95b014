//! Tracing initialization for hosts embedding the launcher.
//!
//! Library modules log through `tracing` macros only; the host application
//! calls [`init_tracing`] once at startup.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Log-level override, e.g. `connect=debug`.
pub const CONNECT_LOG_LEVEL: &str = "CONNECT_LOG_LEVEL";

/// When set to `1`, only WARN and above are logged.
pub const CONNECT_QUIET: &str = "CONNECT_QUIET";

/// Initialize tracing. Call once at process startup; repeated calls are a
/// no-op.
pub fn init_tracing() {
    let quiet = std::env::var(CONNECT_QUIET).map(|v| v == "1").unwrap_or(false);
    let level = if quiet {
        "connect=warn".to_string()
    } else {
        std::env::var(CONNECT_LOG_LEVEL).unwrap_or_else(|_| "info".to_string())
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    tracing::debug!(%level, "tracing initialized");
}
