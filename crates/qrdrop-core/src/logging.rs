//! Console logging setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` always wins over the verbosity flag:
//!
//! ```bash
//! RUST_LOG=qrdrop_core=debug qrdrop-desktop
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Calling this twice is harmless; the second call logs at debug level and
/// keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
