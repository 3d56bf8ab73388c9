//! Tracing output for the examples.
//!
//! The library only emits events; installing a subscriber is up to the
//! application, as done here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes a stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` if `RUST_LOG` is unset.
///
/// # Example
/// ```bash
/// RUST_LOG=fluxus=debug cargo run --example signup
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
