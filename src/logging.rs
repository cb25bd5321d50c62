//! Crate-standard [`tracing`] subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber with the given verbosity (`trace`, `debug`, `info`, `warn`,
/// `error`, or any `EnvFilter` directive string). `RUST_LOG` takes precedence when set.
///
/// Call once, early in `main`; later calls are ignored.
pub fn setup(verbosity: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
