//! Logging and tracing configuration
//!
//! The client emits `debug!` events for each round trip; scenarios opt in by
//! calling `init()` once. Levels are controlled by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for test runs (stdout logging)
///
/// Default level is INFO for this crate, WARN for dependencies. Safe to call
/// more than once; later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("petfriends=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
